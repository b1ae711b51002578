use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{BmiCategory, OverallHealth, Specialist};

use super::thresholds::MONITOR_TIER_MAX_RISKS;

/// Outcome of one risk evaluation. Built once, never mutated afterwards.
///
/// `risks` preserves rule-evaluation order; `specialists` is a set, so a
/// specialist referred by several rules appears once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub risks: Vec<String>,
    pub specialists: BTreeSet<Specialist>,
    pub advice: Vec<String>,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub overall_health: OverallHealth,
}

/// Monotonic ordinal reduction over the risk-label count: more labels can
/// never yield a better tier.
pub fn overall_health_for(risk_count: usize) -> OverallHealth {
    if risk_count == 0 {
        OverallHealth::ExcellentHealth
    } else if risk_count <= MONITOR_TIER_MAX_RISKS {
        OverallHealth::MonitorRecommended
    } else {
        OverallHealth::NeedsMedicalAttention
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(overall_health_for(0), OverallHealth::ExcellentHealth);
        assert_eq!(overall_health_for(1), OverallHealth::MonitorRecommended);
        assert_eq!(overall_health_for(2), OverallHealth::MonitorRecommended);
        assert_eq!(overall_health_for(3), OverallHealth::NeedsMedicalAttention);
    }

    #[test]
    fn tier_never_improves_with_more_risks() {
        for n in 0..10 {
            assert!(overall_health_for(n + 1) >= overall_health_for(n));
        }
    }
}
