use serde::{Deserialize, Serialize};

use super::enums::Sex;

/// Demographic profile captured at registration and editable afterwards.
/// Seeds the default vitals for later checks. Inputs are assumed validated
/// (positive age, weight and height) by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Profile {
    pub fn bmi(&self) -> f64 {
        bmi(self.weight_kg, self.height_cm)
    }
}

/// BMI rounded to two decimals, matching how records display it.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let raw = weight_kg / (height_cm / 100.0).powi(2);
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_reference_values() {
        assert_eq!(bmi(70.0, 170.0), 24.22);
        assert_eq!(bmi(70.0, 150.0), 31.11);
    }

    #[test]
    fn profile_bmi_uses_own_fields() {
        let p = Profile {
            age: 30,
            sex: Sex::Female,
            weight_kg: 55.0,
            height_cm: 160.0,
        };
        assert_eq!(p.bmi(), bmi(55.0, 160.0));
    }
}
