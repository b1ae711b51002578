//! Canonical clinical thresholds.
//!
//! Where upstream iterations of the rule table disagreed (ALT 45 vs 56,
//! Urea 45 vs 50, tier boundary at 1 vs 2 risks) the values here are the
//! canonical choice; see DESIGN.md for the rationale.

/// Fasting glucose at or above this is diabetes-suspicious (mg/dL).
pub const GLUCOSE_DIABETES_MG_DL: f64 = 126.0;
/// Fasting glucose in [100, 126) is impaired tolerance (mg/dL).
pub const GLUCOSE_IMPAIRED_MG_DL: f64 = 100.0;

pub const ADULT_AGE_YEARS: u32 = 18;
pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

pub const SYSTOLIC_BP_MAX_MMHG: f64 = 140.0;
pub const DIASTOLIC_BP_MAX_MMHG: f64 = 90.0;

pub const TSH_MAX_MIU_L: f64 = 4.5;
pub const TSH_MIN_MIU_L: f64 = 0.4;

pub const ALT_MAX_U_PER_L: f64 = 45.0;
pub const AST_MAX_U_PER_L: f64 = 40.0;

pub const CREATININE_MAX_MG_DL: f64 = 1.3;
pub const UREA_MAX_MG_DL: f64 = 50.0;
pub const EGFR_MIN_ML_MIN: f64 = 60.0;

pub const HEMOGLOBIN_MIN_MALE_G_DL: f64 = 13.5;
pub const HEMOGLOBIN_MIN_FEMALE_G_DL: f64 = 12.0;

/// Risk-label counts up to this stay in the middle "monitor" tier.
pub const MONITOR_TIER_MAX_RISKS: usize = 2;
