use crate::models::{Measurements, SourceFormat};

use super::catalog;

/// Scan raw document text for known lab values.
///
/// Text arrives pre-flattened by the external OCR/table/CSV adapter; the
/// source format is recorded for diagnostics only. For each catalog entry the
/// first match anywhere in the text wins. A numeric token that fails to parse
/// as a float skips that identifier rather than erroring.
pub fn extract(raw_text: &str, format: SourceFormat) -> Measurements {
    let mut found = Measurements::new();

    for pattern in catalog::patterns() {
        let Some(token) = pattern.find(raw_text) else {
            continue;
        };
        match token.parse::<f64>() {
            Ok(value) => found.insert(pattern.test, value),
            Err(_) => {
                tracing::debug!(
                    test = pattern.test.as_str(),
                    token,
                    "Numeric token did not parse, skipping identifier"
                );
            }
        }
    }

    tracing::debug!(
        format = format.as_str(),
        values = found.len(),
        "Extraction pass complete"
    );
    found
}
