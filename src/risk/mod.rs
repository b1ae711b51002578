pub mod advice;
pub mod engine;
pub mod thresholds;
pub mod types;

pub use advice::{lifestyle_tips, AdviceTemplates};
pub use engine::evaluate;
pub use types::{overall_health_for, RiskReport};
