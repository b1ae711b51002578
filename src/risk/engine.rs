use std::collections::BTreeSet;

use crate::models::profile::bmi;
use crate::models::{
    BmiCategory, LabTest, Measurements, Profile, Sex, Specialist, Vitals,
};

use super::advice::AdviceTemplates;
use super::thresholds::*;
use super::types::{overall_health_for, RiskReport};

#[derive(Default)]
struct ReportBuilder {
    risks: Vec<String>,
    specialists: BTreeSet<Specialist>,
    advice: Vec<String>,
}

impl ReportBuilder {
    fn flag(&mut self, label: &str, specialist: Option<Specialist>) {
        self.risks.push(label.to_string());
        if let Some(s) = specialist {
            self.specialists.insert(s);
        }
    }
}

/// Evaluate vitals + merged measurements against the fixed rule table.
///
/// Pure function: deterministic for identical inputs, no clock access, no
/// side effects. Rules run in a fixed order, which determines only the order
/// labels appear in, never which rules fire. A measurement absent from the
/// mapping leaves its rule unevaluated; manual vitals are the fallback for
/// glucose, blood pressure and hemoglobin.
pub fn evaluate(vitals: &Vitals, measurements: &Measurements, profile: &Profile) -> RiskReport {
    let mut out = ReportBuilder::default();

    // [1]–[2] Glucose, mutually exclusive bands
    let glucose = measurements.get(LabTest::Glucose).unwrap_or(vitals.glucose);
    if glucose >= GLUCOSE_DIABETES_MG_DL {
        out.flag(
            "High Glucose (Diabetes suspected)",
            Some(Specialist::Endocrinologist),
        );
    } else if glucose >= GLUCOSE_IMPAIRED_MG_DL {
        out.flag("Impaired Glucose Tolerance", Some(Specialist::Endocrinologist));
    }

    // [3] BMI bucket
    let bmi_value = bmi(vitals.weight_kg, vitals.height_cm);
    let bmi_category = classify_bmi(bmi_value, profile.age);
    apply_bmi_rule(&mut out, bmi_category, bmi_value, profile.sex);

    // [4] Blood pressure
    let systolic = measurements.get(LabTest::SystolicBp).unwrap_or(vitals.systolic_bp);
    let diastolic = measurements
        .get(LabTest::DiastolicBp)
        .unwrap_or(vitals.diastolic_bp);
    if systolic >= SYSTOLIC_BP_MAX_MMHG || diastolic >= DIASTOLIC_BP_MAX_MMHG {
        out.flag("High BP", Some(Specialist::Cardiologist));
    }

    // [5]–[6] Thyroid, only when measured
    if let Some(tsh) = measurements.get(LabTest::Tsh) {
        if tsh > TSH_MAX_MIU_L {
            out.flag("Hypothyroidism (High TSH)", Some(Specialist::Endocrinologist));
        } else if tsh < TSH_MIN_MIU_L {
            out.flag("Hyperthyroidism (Low TSH)", Some(Specialist::Endocrinologist));
        }
    }

    // [7]–[8] Liver enzymes
    if let Some(alt) = measurements.get(LabTest::Alt) {
        if alt > ALT_MAX_U_PER_L {
            out.flag("High ALT", Some(Specialist::Hepatologist));
        }
    }
    if let Some(ast) = measurements.get(LabTest::Ast) {
        if ast > AST_MAX_U_PER_L {
            out.flag("High AST", Some(Specialist::Hepatologist));
        }
    }

    // [9]–[11] Kidney
    if let Some(creatinine) = measurements.get(LabTest::Creatinine) {
        if creatinine > CREATININE_MAX_MG_DL {
            out.flag(
                "Kidney function abnormal (Creatinine)",
                Some(Specialist::Nephrologist),
            );
        }
    }
    if let Some(urea) = measurements.get(LabTest::Urea) {
        if urea > UREA_MAX_MG_DL {
            out.flag(
                "Kidney function abnormal (Urea)",
                Some(Specialist::Nephrologist),
            );
        }
    }
    if let Some(egfr) = measurements.get(LabTest::Egfr) {
        if egfr < EGFR_MIN_ML_MIN {
            out.flag("Low eGFR (CKD risk)", Some(Specialist::Nephrologist));
        }
    }

    // [12] Hemoglobin, sex-conditioned threshold
    let hemoglobin = measurements
        .get(LabTest::Hemoglobin)
        .unwrap_or(vitals.hemoglobin);
    let hb_min = match profile.sex {
        Sex::Male => HEMOGLOBIN_MIN_MALE_G_DL,
        Sex::Female => HEMOGLOBIN_MIN_FEMALE_G_DL,
    };
    if hemoglobin < hb_min {
        out.flag("Low Hemoglobin", Some(Specialist::Hematologist));
        out.advice.push(AdviceTemplates::low_hemoglobin());
    }

    let overall_health = overall_health_for(out.risks.len());

    RiskReport {
        risks: out.risks,
        specialists: out.specialists,
        advice: out.advice,
        bmi: bmi_value,
        bmi_category,
        overall_health,
    }
}

fn classify_bmi(bmi_value: f64, age: u32) -> BmiCategory {
    if age < ADULT_AGE_YEARS {
        BmiCategory::PercentileCheck
    } else if bmi_value < BMI_UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi_value < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi_value < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// The Normal bucket is advice-only; every other bucket is also a risk label.
/// Counting "Normal weight" as a risk would park every healthy adult in the
/// middle overall-health tier.
fn apply_bmi_rule(out: &mut ReportBuilder, category: BmiCategory, bmi_value: f64, sex: Sex) {
    let mut advice = match category {
        BmiCategory::PercentileCheck => AdviceTemplates::percentile_check(),
        BmiCategory::Underweight => AdviceTemplates::underweight(),
        BmiCategory::Normal => AdviceTemplates::normal_weight(),
        BmiCategory::Overweight => AdviceTemplates::overweight(),
        BmiCategory::Obese => AdviceTemplates::obese(),
    };

    if sex == Sex::Female && bmi_value >= BMI_OVERWEIGHT_MIN {
        advice.push_str(AdviceTemplates::female_cardio_suffix());
    }

    match category {
        BmiCategory::Normal => {}
        BmiCategory::Obese => out.flag(category.as_str(), Some(Specialist::Nutritionist)),
        _ => out.flag(category.as_str(), None),
    }

    out.advice.push(advice);
}
