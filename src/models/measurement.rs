use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical identifier for one clinical measurement.
/// Serialized names match the keys used in stored patient records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LabTest {
    Glucose,
    Hemoglobin,
    #[serde(rename = "Systolic_BP")]
    SystolicBp,
    #[serde(rename = "Diastolic_BP")]
    DiastolicBp,
    #[serde(rename = "TSH")]
    Tsh,
    #[serde(rename = "ALT")]
    Alt,
    #[serde(rename = "AST")]
    Ast,
    Creatinine,
    Urea,
    #[serde(rename = "WBC")]
    Wbc,
    #[serde(rename = "RBC")]
    Rbc,
    Platelets,
    #[serde(rename = "MCV")]
    Mcv,
    #[serde(rename = "MCH")]
    Mch,
    #[serde(rename = "MCHC")]
    Mchc,
    Sodium,
    Potassium,
    Chloride,
    #[serde(rename = "Total Cholesterol")]
    TotalCholesterol,
    #[serde(rename = "LDL")]
    Ldl,
    #[serde(rename = "HDL")]
    Hdl,
    Triglycerides,
    T3,
    T4,
    Bilirubin,
    #[serde(rename = "ALP")]
    Alp,
    #[serde(rename = "GGT")]
    Ggt,
    #[serde(rename = "Uric Acid")]
    UricAcid,
    #[serde(rename = "eGFR")]
    Egfr,
}

impl LabTest {
    pub fn as_str(self) -> &'static str {
        match self {
            LabTest::Glucose => "Glucose",
            LabTest::Hemoglobin => "Hemoglobin",
            LabTest::SystolicBp => "Systolic_BP",
            LabTest::DiastolicBp => "Diastolic_BP",
            LabTest::Tsh => "TSH",
            LabTest::Alt => "ALT",
            LabTest::Ast => "AST",
            LabTest::Creatinine => "Creatinine",
            LabTest::Urea => "Urea",
            LabTest::Wbc => "WBC",
            LabTest::Rbc => "RBC",
            LabTest::Platelets => "Platelets",
            LabTest::Mcv => "MCV",
            LabTest::Mch => "MCH",
            LabTest::Mchc => "MCHC",
            LabTest::Sodium => "Sodium",
            LabTest::Potassium => "Potassium",
            LabTest::Chloride => "Chloride",
            LabTest::TotalCholesterol => "Total Cholesterol",
            LabTest::Ldl => "LDL",
            LabTest::Hdl => "HDL",
            LabTest::Triglycerides => "Triglycerides",
            LabTest::T3 => "T3",
            LabTest::T4 => "T4",
            LabTest::Bilirubin => "Bilirubin",
            LabTest::Alp => "ALP",
            LabTest::Ggt => "GGT",
            LabTest::UricAcid => "Uric Acid",
            LabTest::Egfr => "eGFR",
        }
    }

    /// Default unit for display purposes.
    pub fn default_unit(self) -> &'static str {
        match self {
            LabTest::Glucose | LabTest::TotalCholesterol | LabTest::Ldl | LabTest::Hdl
            | LabTest::Triglycerides | LabTest::UricAcid => "mg/dL",
            LabTest::Hemoglobin | LabTest::Mchc => "g/dL",
            LabTest::SystolicBp | LabTest::DiastolicBp => "mmHg",
            LabTest::Tsh => "mIU/L",
            LabTest::Alt | LabTest::Ast | LabTest::Alp | LabTest::Ggt => "U/L",
            LabTest::Creatinine | LabTest::Urea | LabTest::Bilirubin => "mg/dL",
            LabTest::Wbc | LabTest::Platelets => "10^3/uL",
            LabTest::Rbc => "10^6/uL",
            LabTest::Mcv => "fL",
            LabTest::Mch => "pg",
            LabTest::Sodium | LabTest::Potassium | LabTest::Chloride => "mmol/L",
            LabTest::T3 | LabTest::T4 => "ng/dL",
            LabTest::Egfr => "mL/min/1.73m2",
        }
    }
}

/// Mapping of lab-test identifiers to parsed values.
///
/// A key is present only if a value was successfully parsed for it; absence is
/// distinct from a measured 0.0 and downstream rules must presence-check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurements(BTreeMap<LabTest, f64>);

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, test: LabTest) -> Option<f64> {
        self.0.get(&test).copied()
    }

    pub fn contains(&self, test: LabTest) -> bool {
        self.0.contains_key(&test)
    }

    pub fn insert(&mut self, test: LabTest, value: f64) {
        self.0.insert(test, value);
    }

    /// Keep the larger of the existing and incoming value (max-wins policy).
    pub fn insert_max(&mut self, test: LabTest, value: f64) {
        self.0
            .entry(test)
            .and_modify(|v| *v = v.max(value))
            .or_insert(value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LabTest, f64)> + '_ {
        self.0.iter().map(|(t, v)| (*t, *v))
    }
}

impl FromIterator<(LabTest, f64)> for Measurements {
    fn from_iter<I: IntoIterator<Item = (LabTest, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_not_zero() {
        let mut m = Measurements::new();
        assert_eq!(m.get(LabTest::Creatinine), None);
        m.insert(LabTest::Creatinine, 0.0);
        assert_eq!(m.get(LabTest::Creatinine), Some(0.0));
    }

    #[test]
    fn insert_max_keeps_larger() {
        let mut m = Measurements::new();
        m.insert_max(LabTest::Glucose, 110.0);
        m.insert_max(LabTest::Glucose, 95.0);
        assert_eq!(m.get(LabTest::Glucose), Some(110.0));
        m.insert_max(LabTest::Glucose, 130.0);
        assert_eq!(m.get(LabTest::Glucose), Some(130.0));
    }

    #[test]
    fn serializes_with_canonical_keys() {
        let m: Measurements =
            [(LabTest::SystolicBp, 140.0), (LabTest::Egfr, 55.0)].into_iter().collect();
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"Systolic_BP\""));
        assert!(json.contains("\"eGFR\""));
        let back: Measurements = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
