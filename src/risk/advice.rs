/// Advice template builder. Wording stays calm and preparatory: the report
/// points the user toward a conversation with a professional, it never
/// prescribes.
pub struct AdviceTemplates;

impl AdviceTemplates {
    pub fn percentile_check() -> String {
        "Consult pediatrician for proper growth assessment.".to_string()
    }

    pub fn underweight() -> String {
        "Increase calorie intake & balanced diet.".to_string()
    }

    pub fn normal_weight() -> String {
        "Maintain healthy lifestyle.".to_string()
    }

    pub fn overweight() -> String {
        "Increase physical activity and monitor diet.".to_string()
    }

    pub fn obese() -> String {
        "Consult doctor/nutritionist for weight management.".to_string()
    }

    /// Appended to the BMI advice for women at or above the overweight cutoff.
    pub fn female_cardio_suffix() -> &'static str {
        " (Women have slightly higher cardiovascular risk at lower BMI.)"
    }

    pub fn low_hemoglobin() -> String {
        "Iron-rich diet & check for anemia.".to_string()
    }
}

/// Static lifestyle tips rendered by the presentation layer alongside reports.
pub fn lifestyle_tips() -> &'static [&'static str] {
    &[
        "Eat a balanced diet with fruits & vegetables",
        "Exercise at least 30 minutes daily",
        "Drink enough water",
        "Sleep 7-8 hours every night",
        "Avoid smoking & limit alcohol",
        "Manage stress with meditation or yoga",
    ]
}
