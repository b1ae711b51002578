use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a stored string does not name a known enum variant.
#[derive(Debug, Error)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Sex {
    Male => "Male",
    Female => "Female",
});

str_enum!(SourceFormat {
    Csv => "csv",
    Pdf => "pdf",
    Image => "image",
    PlainText => "plain_text",
});

str_enum!(Specialist {
    Cardiologist => "Cardiologist",
    Endocrinologist => "Endocrinologist",
    Hematologist => "Hematologist",
    Hepatologist => "Hepatologist",
    Nephrologist => "Nephrologist",
    Nutritionist => "Nutritionist",
});

// Variants are declared best-to-worst so Ord matches severity.
str_enum!(OverallHealth {
    ExcellentHealth => "Excellent Health",
    MonitorRecommended => "Monitor Recommended",
    NeedsMedicalAttention => "Needs Medical Attention",
});

str_enum!(BmiCategory {
    PercentileCheck => "Check BMI percentile for age & sex",
    Underweight => "Underweight",
    Normal => "Normal weight",
    Overweight => "Overweight",
    Obese => "Obese",
});
