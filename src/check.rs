//! One upload-and-check cycle, request-scoped.
//!
//! Everything a check needs comes in as arguments and everything it produced
//! goes out in the outcome; there is no process-wide session state.

use chrono::NaiveDateTime;

use crate::extract::{extract_batch, DocumentWarning, SourceDocument};
use crate::models::{Measurements, PatientRecord, Profile, Vitals};
use crate::risk::{evaluate, RiskReport};

/// Everything produced by one check cycle. The caller appends `record` to the
/// user's history and renders the rest read-only.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub report: RiskReport,
    pub record: PatientRecord,
    pub measurements: Measurements,
    pub warnings: Vec<DocumentWarning>,
}

/// Run the full pipeline: per-document extraction, max-wins merge, rule
/// evaluation, record assembly. `recorded_at` only stamps the persisted
/// record; evaluation itself never reads a clock.
pub fn run_check(
    profile: &Profile,
    vitals: &Vitals,
    documents: &[SourceDocument],
    recorded_at: NaiveDateTime,
) -> CheckOutcome {
    let batch = extract_batch(documents);
    let report = evaluate(vitals, &batch.measurements, profile);

    tracing::info!(
        documents = documents.len(),
        values = batch.measurements.len(),
        risks = report.risks.len(),
        overall = report.overall_health.as_str(),
        "Check cycle complete"
    );

    let record = PatientRecord::from_check(
        profile,
        vitals,
        batch.measurements.clone(),
        report.bmi,
        report.risks.clone(),
        report.overall_health,
        recorded_at,
    );

    CheckOutcome {
        report,
        record,
        measurements: batch.measurements,
        warnings: batch.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabTest, OverallHealth, Sex, SourceFormat};
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn extracted_values_override_manual_vitals() {
        let profile = Profile {
            age: 40,
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 170.0,
        };
        let vitals = Vitals::seeded_from(&profile); // glucose 90.0
        let docs = [SourceDocument::readable(
            "chem.pdf",
            SourceFormat::Pdf,
            "Glucose: 132",
        )];

        let outcome = run_check(&profile, &vitals, &docs, timestamp());
        assert_eq!(outcome.record.glucose, 132.0);
        assert!(outcome
            .report
            .risks
            .contains(&"High Glucose (Diabetes suspected)".to_string()));
        assert_eq!(outcome.measurements.get(LabTest::Glucose), Some(132.0));
    }

    #[test]
    fn no_documents_falls_back_to_manual_vitals() {
        let profile = Profile {
            age: 40,
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 170.0,
        };
        let vitals = Vitals::seeded_from(&profile);
        let outcome = run_check(&profile, &vitals, &[], timestamp());
        assert!(outcome.warnings.is_empty());
        assert!(outcome.measurements.is_empty());
        assert_eq!(outcome.report.overall_health, OverallHealth::ExcellentHealth);
        assert_eq!(outcome.record.recorded_at, timestamp());
    }
}
