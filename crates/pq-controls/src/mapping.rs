//! Governor and excitation mappings.
//!
//! - Governor: `0% -> 0 MW`, `100% -> P_max`
//! - Excitation: `0% -> -Q_max` (leading), `50% -> 0`, `100% -> +Q_max` (lagging)
//!
//! Each pair is an exact inverse up to the clamping done at either end.

use pq_core::{clamp_percent, LimitViolation, MachineLimits, OperatingPoint};

use crate::range::ControllerRange;

/// Map governor percentage to active power (MW).
pub fn governor_to_p(percent: f64, limits: &MachineLimits) -> f64 {
    ControllerRange::new(0.0, limits.p_max_mw).scale(percent)
}

/// Map excitation percentage to reactive power (MVAr).
pub fn excitation_to_q(percent: f64, limits: &MachineLimits) -> f64 {
    let centered = clamp_percent(percent) / 100.0 - 0.5;
    centered * 2.0 * limits.q_max_mvar
}

/// Governor percentage that produces `p`. A machine without active power range reads 0%.
pub fn p_to_governor(p: f64, limits: &MachineLimits) -> f64 {
    if limits.p_max_mw <= 0.0 {
        return 0.0;
    }
    ControllerRange::new(0.0, limits.p_max_mw).percent_of(p)
}

/// Excitation percentage that produces `q`. A machine without reactive range reads 50%.
pub fn q_to_excitation(q: f64, limits: &MachineLimits) -> f64 {
    if limits.q_max_mvar <= 0.0 {
        return 50.0;
    }
    clamp_percent((q / limits.q_max_mvar) * 50.0 + 50.0)
}

/// Slider positions for both controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPosition {
    pub governor_percent: f64,
    pub excitation_percent: f64,
}

impl Default for ControlPosition {
    fn default() -> Self {
        Self {
            governor_percent: 50.0,
            excitation_percent: 50.0,
        }
    }
}

/// Slider positions that reproduce `point` on this machine.
pub fn control_position_for(point: &OperatingPoint, limits: &MachineLimits) -> ControlPosition {
    ControlPosition {
        governor_percent: p_to_governor(point.p_mw, limits),
        excitation_percent: q_to_excitation(point.q_mvar, limits),
    }
}

/// Build the operating point requested by the controls and clamp it to the machine.
pub fn derive_operating_point(
    governor_percent: f64,
    excitation_percent: f64,
    limits: &MachineLimits,
) -> (OperatingPoint, Vec<LimitViolation>) {
    let raw = OperatingPoint::new(
        governor_to_p(governor_percent, limits),
        excitation_to_q(excitation_percent, limits),
    );
    let (point, violations) = raw.clamp_to_limits(limits);
    if !violations.is_empty() {
        tracing::debug!(
            requested_p = raw.p_mw,
            requested_q = raw.q_mvar,
            p = point.p_mw,
            q = point.q_mvar,
            count = violations.len(),
            "operating point clamped to machine limits"
        );
    }
    (point, violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: MachineLimits = MachineLimits {
        s_rated_mva: 50.0,
        p_max_mw: 50.0,
        q_max_mvar: 35.0,
    };

    #[test]
    fn governor_maps_linearly() {
        assert_eq!(governor_to_p(0.0, &LIMITS), 0.0);
        assert_eq!(governor_to_p(50.0, &LIMITS), 25.0);
        assert_eq!(governor_to_p(100.0, &LIMITS), LIMITS.p_max_mw);
    }

    #[test]
    fn excitation_maps_symmetrically() {
        assert_eq!(excitation_to_q(0.0, &LIMITS), -LIMITS.q_max_mvar);
        assert_eq!(excitation_to_q(50.0, &LIMITS), 0.0);
        assert_eq!(excitation_to_q(100.0, &LIMITS), LIMITS.q_max_mvar);
    }

    #[test]
    fn out_of_range_percent_is_clamped_silently() {
        assert_eq!(governor_to_p(-10.0, &LIMITS), 0.0);
        assert_eq!(governor_to_p(140.0, &LIMITS), LIMITS.p_max_mw);
        assert_eq!(excitation_to_q(-1.0, &LIMITS), -LIMITS.q_max_mvar);
    }

    #[test]
    fn inverse_mappings() {
        assert_eq!(p_to_governor(25.0, &LIMITS), 50.0);
        assert_eq!(p_to_governor(80.0, &LIMITS), 100.0);
        assert_eq!(q_to_excitation(0.0, &LIMITS), 50.0);
        assert_eq!(q_to_excitation(-35.0, &LIMITS), 0.0);
        assert_eq!(q_to_excitation(70.0, &LIMITS), 100.0);
    }

    #[test]
    fn degenerate_machine_reads_neutral() {
        let degenerate = MachineLimits {
            s_rated_mva: 10.0,
            p_max_mw: 0.0,
            q_max_mvar: -1.0,
        };
        assert_eq!(p_to_governor(5.0, &degenerate), 0.0);
        assert_eq!(q_to_excitation(5.0, &degenerate), 50.0);
    }

    #[test]
    fn saturated_controls_are_clamped() {
        let (op, violations) = derive_operating_point(120.0, 120.0, &LIMITS);
        assert!(!violations.is_empty());
        assert!(op.p_mw <= LIMITS.p_max_mw);
        assert!(op.q_mvar.abs() <= LIMITS.q_max_mvar);
        assert!(op.apparent_power() <= LIMITS.s_rated_mva + 1e-6);
    }

    #[test]
    fn neutral_controls_give_feasible_point() {
        let (op, violations) = derive_operating_point(50.0, 50.0, &LIMITS);
        assert!(violations.is_empty());
        assert_eq!(op.as_tuple(), (25.0, 0.0));
    }

    #[test]
    fn control_position_roundtrip() {
        let point = OperatingPoint::new(40.0, -17.5);
        let pos = control_position_for(&point, &LIMITS);
        assert_eq!(pos.governor_percent, 80.0);
        assert_eq!(pos.excitation_percent, 25.0);
    }
}
