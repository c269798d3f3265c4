//! Operating point in the P/Q plane.
//!
//! Sign convention: positive Q is lagging (inductive, supplying vars),
//! negative Q is leading (capacitive, absorbing vars).

use std::fmt;

use crate::limits::MachineLimits;
use crate::numeric::{Real, DEGENERACY_EPS};
use crate::units::{radians, to_degrees};

/// A limit that had to be enforced while clamping an operating point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LimitViolation {
    ActivePower,
    ReactivePower,
    ApparentPower,
}

impl LimitViolation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ActivePower => "active power exceeds machine rating; clamped",
            Self::ReactivePower => "reactive power exceeds excitation limits; clamped",
            Self::ApparentPower => {
                "operating point exceeds apparent-power rating; clamped to boundary."
            }
        }
    }
}

impl fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatingPoint {
    /// Active power (MW)
    pub p_mw: Real,
    /// Reactive power (MVAr)
    pub q_mvar: Real,
    /// Not used by the geometry.
    pub frequency_hz: Option<Real>,
}

impl OperatingPoint {
    pub fn new(p_mw: Real, q_mvar: Real) -> Self {
        Self {
            p_mw,
            q_mvar,
            frequency_hz: None,
        }
    }

    pub fn with_frequency(mut self, frequency_hz: Real) -> Self {
        self.frequency_hz = Some(frequency_hz);
        self
    }

    pub fn as_tuple(&self) -> (Real, Real) {
        (self.p_mw, self.q_mvar)
    }

    /// Apparent power S = |P + jQ| (MVA).
    pub fn apparent_power(&self) -> Real {
        self.p_mw.hypot(self.q_mvar)
    }

    /// P / S, or `None` at the origin.
    pub fn power_factor(&self) -> Option<Real> {
        let s = self.apparent_power();
        if s <= DEGENERACY_EPS {
            return None;
        }
        Some(self.p_mw / s)
    }

    /// atan2(Q, P), or `None` at the origin where the angle carries no meaning.
    pub fn angle_radians(&self) -> Option<Real> {
        if self.p_mw.abs() <= DEGENERACY_EPS && self.q_mvar.abs() <= DEGENERACY_EPS {
            return None;
        }
        Some(self.q_mvar.atan2(self.p_mw))
    }

    pub fn angle_degrees(&self) -> Option<Real> {
        self.angle_radians().map(|phi| to_degrees(radians(phi)))
    }

    /// Stator current in per-unit of rated current (S / S_rated at rated voltage).
    pub fn stator_current_pu(&self, limits: &MachineLimits) -> Real {
        if limits.s_rated_mva <= 0.0 {
            return 0.0;
        }
        self.apparent_power() / limits.s_rated_mva
    }

    /// Enforce the machine limits in fixed order: P, then Q, then S.
    ///
    /// Each projection works on the output of the previous one. The returned
    /// violations list the projections that actually moved the point, in the
    /// order they were applied; it is empty for a feasible point.
    pub fn clamp_to_limits(&self, limits: &MachineLimits) -> (OperatingPoint, Vec<LimitViolation>) {
        let mut violations = Vec::new();

        let (p, clamped_p) = limits.clamp_p(self.p_mw);
        if clamped_p {
            violations.push(LimitViolation::ActivePower);
        }

        let (q, clamped_q) = limits.clamp_q(self.q_mvar);
        if clamped_q {
            violations.push(LimitViolation::ReactivePower);
        }

        let (p, q, clamped_s) = limits.clamp_s(p, q);
        if clamped_s {
            violations.push(LimitViolation::ApparentPower);
        }

        (OperatingPoint::new(p, q), violations)
    }
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
    fn point_on_circle_is_not_clamped() {
        let op = OperatingPoint::new(40.0, 30.0);
        assert!((op.apparent_power() - 50.0).abs() < 1e-12);
        let (clamped, violations) = op.clamp_to_limits(&LIMITS);
        assert!(violations.is_empty());
        assert_eq!(clamped.as_tuple(), (40.0, 30.0));
    }

    #[test]
    fn point_outside_circle_is_projected() {
        let op = OperatingPoint::new(60.0, 10.0);
        let (clamped, violations) = op.clamp_to_limits(&LIMITS);
        assert_eq!(violations.last(), Some(&LimitViolation::ApparentPower));
        assert!(violations.last().unwrap().message().contains("apparent-power rating"));
        assert!(clamped.apparent_power() <= LIMITS.s_rated_mva + 1e-6);
    }

    #[test]
    fn violations_follow_p_q_s_order() {
        let op = OperatingPoint::new(70.0, -60.0);
        let (clamped, violations) = op.clamp_to_limits(&LIMITS);
        assert_eq!(
            violations,
            vec![
                LimitViolation::ActivePower,
                LimitViolation::ReactivePower,
                LimitViolation::ApparentPower,
            ]
        );
        assert!((clamped.apparent_power() - 50.0).abs() < 1e-9);
        assert!(clamped.q_mvar < 0.0);
    }

    #[test]
    fn clamp_does_not_mutate_input() {
        let op = OperatingPoint::new(70.0, 10.0).with_frequency(50.0);
        let _ = op.clamp_to_limits(&LIMITS);
        assert_eq!(op.p_mw, 70.0);
        assert_eq!(op.frequency_hz, Some(50.0));
    }

    #[test]
    fn origin_has_no_power_factor_or_angle() {
        let op = OperatingPoint::new(0.0, 0.0);
        assert_eq!(op.power_factor(), None);
        assert_eq!(op.angle_radians(), None);
        assert_eq!(op.angle_degrees(), None);

        let tiny = OperatingPoint::new(1e-10, -1e-10);
        assert_eq!(tiny.power_factor(), None);
        assert_eq!(tiny.angle_degrees(), None);
    }

    #[test]
    fn lagging_point_readings() {
        let op = OperatingPoint::new(40.0, 30.0);
        assert!((op.power_factor().unwrap() - 0.8).abs() < 1e-12);
        assert!((op.angle_degrees().unwrap() - 36.869_897_645_844_02).abs() < 1e-9);
        assert!((op.stator_current_pu(&LIMITS) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pure_reactive_point_has_zero_power_factor() {
        let op = OperatingPoint::new(0.0, -20.0);
        assert_eq!(op.power_factor(), Some(0.0));
        assert!((op.angle_degrees().unwrap() + 90.0).abs() < 1e-9);
    }

    #[test]
    fn violation_display_matches_message() {
        assert_eq!(
            LimitViolation::ReactivePower.to_string(),
            "reactive power exceeds excitation limits; clamped"
        );
    }
}
