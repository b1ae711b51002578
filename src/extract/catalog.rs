use std::sync::LazyLock;

use regex::Regex;

use crate::models::LabTest;

/// A compiled label pattern for one lab-test identifier.
///
/// The regex is case-insensitive: synonym alternation, optional `:` or `=`
/// separator, then a numeric capture group. Blood-pressure identifiers capture
/// integers only; everything else allows a decimal fraction.
pub struct LabPattern {
    pub test: LabTest,
    regex: Regex,
}

impl LabPattern {
    /// First numeric token following the label anywhere in `text`, unparsed.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

fn pattern(test: LabTest, synonyms: &str, integer_only: bool) -> LabPattern {
    let numeric = if integer_only {
        "[0-9]+"
    } else {
        r"[0-9]+(?:\.[0-9]+)?"
    };
    let source = format!(r"(?i)\b(?:{synonyms})\s*[:=]?\s*({numeric})");
    LabPattern {
        test,
        regex: Regex::new(&source).expect("lab pattern must compile"),
    }
}

/// The synonym catalog. Kept separate from matching logic so it can be
/// exercised on its own; one entry per identifier, each searched independently.
static LAB_PATTERNS: LazyLock<Vec<LabPattern>> = LazyLock::new(|| {
    vec![
        pattern(LabTest::Glucose, r"Glucose|GLU", false),
        pattern(LabTest::Hemoglobin, r"Hemoglobin|Hb|H B", false),
        pattern(LabTest::SystolicBp, r"Systolic|Sys\.?", true),
        pattern(LabTest::DiastolicBp, r"Diastolic|Dia\.?", true),
        pattern(LabTest::Tsh, r"TSH|Thyroid", false),
        pattern(LabTest::Alt, r"ALT|SGPT", false),
        pattern(LabTest::Ast, r"AST|SGOT", false),
        pattern(LabTest::Creatinine, r"Creatinine|CREA", false),
        pattern(LabTest::Urea, r"Urea|BUN", false),
        pattern(LabTest::Wbc, r"WBC|White Blood Cells?|Leukocytes?", false),
        pattern(LabTest::Rbc, r"RBC|Red Blood Cells?|Erythrocytes?", false),
        pattern(LabTest::Platelets, r"Platelets?|PLT", false),
        pattern(LabTest::Mcv, r"MCV", false),
        pattern(LabTest::Mch, r"MCH", false),
        pattern(LabTest::Mchc, r"MCHC", false),
        pattern(LabTest::Sodium, r"Sodium|Na\+?", false),
        pattern(LabTest::Potassium, r"Potassium|K\+?", false),
        pattern(LabTest::Chloride, r"Chloride|Cl\-?", false),
        pattern(LabTest::TotalCholesterol, r"Total Cholesterol|Cholesterol|CHOL", false),
        pattern(LabTest::Ldl, r"LDL(?:-C)?", false),
        pattern(LabTest::Hdl, r"HDL(?:-C)?", false),
        pattern(LabTest::Triglycerides, r"Triglycerides?|TRIG|TG", false),
        pattern(LabTest::T3, r"T3|Triiodothyronine", false),
        pattern(LabTest::T4, r"T4|Thyroxine", false),
        pattern(LabTest::Bilirubin, r"Bilirubin(?:\s+Total)?|BIL", false),
        pattern(LabTest::Alp, r"ALP|Alkaline Phosphatase", false),
        pattern(LabTest::Ggt, r"GGT|Gamma[- ]?GT", false),
        pattern(LabTest::UricAcid, r"Uric Acid|UA", false),
        pattern(LabTest::Egfr, r"eGFR|GFR", false),
    ]
});

pub fn patterns() -> &'static [LabPattern] {
    &LAB_PATTERNS
}
