//! Preset operating points for guided exercises.

use pq_core::{MachineLimits, OperatingPoint};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub operating_point: OperatingPoint,
}

/// Highest-P point on the machine that runs at power factor `pf`.
fn pf_point(limits: &MachineLimits, pf: f64) -> OperatingPoint {
    let pf_abs = pf.abs().clamp(1e-6, 0.999);
    let target_p = limits.p_max_mw.min(limits.s_rated_mva * pf_abs);
    let s = target_p / pf_abs;
    let q_abs = (s * s - target_p * target_p).max(0.0).sqrt();
    let q = if pf >= 0.0 { q_abs } else { -q_abs };
    OperatingPoint::new(target_p, q)
}

fn clamped(point: OperatingPoint, limits: &MachineLimits) -> OperatingPoint {
    point.clamp_to_limits(limits).0
}

pub fn nominal_pf_085_lag(limits: &MachineLimits) -> Scenario {
    Scenario {
        name: "Nominal PF 0.85 lag".to_string(),
        description: "Operate at power factor ~0.85 lagging for rated loading.".to_string(),
        operating_point: clamped(pf_point(limits, 0.85), limits),
    }
}

pub fn voltage_support(limits: &MachineLimits) -> Scenario {
    let base = pf_point(limits, 0.95);
    let target_q = limits
        .q_max_mvar
        .min(base.q_mvar + 0.4 * limits.q_max_mvar);
    Scenario {
        name: "Voltage support (+Q)".to_string(),
        description: "Increase excitation to supply reactive power while keeping P constant."
            .to_string(),
        operating_point: clamped(OperatingPoint::new(base.p_mw, target_q), limits),
    }
}

pub fn capacitive_support(limits: &MachineLimits) -> Scenario {
    let base = pf_point(limits, 0.95);
    let target_q = (-limits.q_max_mvar).max(base.q_mvar - 0.6 * limits.q_max_mvar);
    Scenario {
        name: "Capacitive compensation (-Q)".to_string(),
        description: "Reduce excitation to absorb reactive power with constant P.".to_string(),
        operating_point: clamped(OperatingPoint::new(base.p_mw, target_q), limits),
    }
}

/// All presets, in display order.
pub fn scenario_list(limits: &MachineLimits) -> Vec<Scenario> {
    vec![
        nominal_pf_085_lag(limits),
        voltage_support(limits),
        capacitive_support(limits),
    ]
}

pub fn find_scenario(limits: &MachineLimits, name: &str) -> AppResult<Scenario> {
    scenario_list(limits)
        .into_iter()
        .find(|scenario| scenario.name == name)
        .ok_or_else(|| AppError::ScenarioNotFound(name.to_string()))
}
