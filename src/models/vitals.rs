use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// Manually entered vitals for one check cycle.
/// These are fallback values only: an extracted measurement for the same
/// identifier always overrides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub glucose: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub hemoglobin: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Vitals {
    /// Form defaults, with weight and height seeded from the profile.
    pub fn seeded_from(profile: &Profile) -> Self {
        Self {
            glucose: 90.0,
            systolic_bp: 120.0,
            diastolic_bp: 80.0,
            hemoglobin: 14.0,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Sex;

    #[test]
    fn seeded_vitals_take_profile_body_metrics() {
        let profile = Profile {
            age: 40,
            sex: Sex::Male,
            weight_kg: 82.5,
            height_cm: 181.0,
        };
        let vitals = Vitals::seeded_from(&profile);
        assert_eq!(vitals.weight_kg, 82.5);
        assert_eq!(vitals.height_cm, 181.0);
        assert_eq!(vitals.glucose, 90.0);
    }
}
