use serde::{Deserialize, Serialize};

use crate::models::{Measurements, SourceFormat};

use super::merge::merge_max;
use super::parser::extract;

/// One uploaded document as delivered by the external text adapter.
/// `text` is `Err` when the adapter could not read the file (corrupt upload,
/// unsupported encoding); the reason string is surfaced as a warning.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub id: String,
    pub format: SourceFormat,
    pub text: Result<String, String>,
}

impl SourceDocument {
    pub fn readable(id: impl Into<String>, format: SourceFormat, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            format,
            text: Ok(text.into()),
        }
    }

    pub fn unreadable(
        id: impl Into<String>,
        format: SourceFormat,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            format,
            text: Err(reason.into()),
        }
    }
}

/// Per-document problem that did not stop the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentWarning {
    /// The adapter failed on this document; it contributed an empty mapping.
    Unreadable { document_id: String, reason: String },
}

/// Merged result of one upload batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub measurements: Measurements,
    pub warnings: Vec<DocumentWarning>,
}

/// Extract every document in the batch and merge the mappings (max-wins).
/// A failed document degrades to an empty contribution plus a warning; it
/// never aborts the rest of the batch.
pub fn extract_batch(documents: &[SourceDocument]) -> BatchOutcome {
    let mut warnings = Vec::new();
    let mut mappings = Vec::with_capacity(documents.len());

    for doc in documents {
        match &doc.text {
            Ok(text) => mappings.push(extract(text, doc.format)),
            Err(reason) => {
                tracing::warn!(
                    document_id = %doc.id,
                    reason = %reason,
                    "Document unreadable, continuing batch without it"
                );
                warnings.push(DocumentWarning::Unreadable {
                    document_id: doc.id.clone(),
                    reason: reason.clone(),
                });
            }
        }
    }

    BatchOutcome {
        measurements: merge_max(mappings),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabTest;

    #[test]
    fn batch_merges_across_documents() {
        let docs = vec![
            SourceDocument::readable("cbc.pdf", SourceFormat::Pdf, "Hemoglobin: 11.0"),
            SourceDocument::readable("chem.csv", SourceFormat::Csv, "Glucose 127\nHemoglobin 12.4"),
        ];
        let outcome = extract_batch(&docs);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.measurements.get(LabTest::Glucose), Some(127.0));
        // max-wins across the two hemoglobin readings
        assert_eq!(outcome.measurements.get(LabTest::Hemoglobin), Some(12.4));
    }

    #[test]
    fn unreadable_document_warns_but_does_not_abort() {
        let docs = vec![
            SourceDocument::unreadable("scan.jpg", SourceFormat::Image, "decode failed"),
            SourceDocument::readable("chem.csv", SourceFormat::Csv, "Glucose 127"),
        ];
        let outcome = extract_batch(&docs);
        assert_eq!(outcome.measurements.get(LabTest::Glucose), Some(127.0));
        assert_eq!(
            outcome.warnings,
            vec![DocumentWarning::Unreadable {
                document_id: "scan.jpg".into(),
                reason: "decode failed".into(),
            }]
        );
    }

    #[test]
    fn document_order_does_not_matter() {
        let a = SourceDocument::readable("a", SourceFormat::Pdf, "Urea: 48\nGlucose: 101");
        let b = SourceDocument::readable("b", SourceFormat::Pdf, "Urea: 52");
        let ab = extract_batch(&[a.clone(), b.clone()]);
        let ba = extract_batch(&[b, a]);
        assert_eq!(ab.measurements, ba.measurements);
        assert_eq!(ab.measurements.get(LabTest::Urea), Some(52.0));
    }
}
