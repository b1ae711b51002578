use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{OverallHealth, Sex};
use super::measurement::{LabTest, Measurements};
use super::profile::Profile;
use super::vitals::Vitals;

/// Snapshot persisted after one check cycle.
/// Records are append-only: history is never edited or deleted, only the live
/// demographic profile changes between checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: Uuid,
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub glucose: f64,
    pub bmi: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub hemoglobin: f64,
    pub labs: Measurements,
    pub risks: Vec<String>,
    pub overall_health: OverallHealth,
    pub recorded_at: NaiveDateTime,
}

impl PatientRecord {
    /// Assemble a record from the inputs and outputs of one evaluation.
    /// The timestamp is supplied by the caller; evaluation itself never
    /// consults a clock.
    pub fn from_check(
        profile: &Profile,
        vitals: &Vitals,
        labs: Measurements,
        bmi: f64,
        risks: Vec<String>,
        overall_health: OverallHealth,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            age: profile.age,
            sex: profile.sex,
            weight_kg: vitals.weight_kg,
            height_cm: vitals.height_cm,
            glucose: labs.get(LabTest::Glucose).unwrap_or(vitals.glucose),
            bmi,
            systolic_bp: labs.get(LabTest::SystolicBp).unwrap_or(vitals.systolic_bp),
            diastolic_bp: labs.get(LabTest::DiastolicBp).unwrap_or(vitals.diastolic_bp),
            hemoglobin: labs.get(LabTest::Hemoglobin).unwrap_or(vitals.hemoglobin),
            labs,
            risks,
            overall_health,
            recorded_at,
        }
    }
}
