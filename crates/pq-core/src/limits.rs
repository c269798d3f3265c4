//! Machine capability region.
//!
//! The region is the intersection of three constraints:
//! - active power in `[0, P_max]` (one-sided, a generator does not motor here)
//! - reactive power in `[-Q_max, +Q_max]`
//! - apparent power inside the rating circle `P² + Q² <= S_rated²`
//!
//! Each constraint has its own projection. All projections are idempotent and
//! report whether they moved the input by more than [`CHANGE_TOL`].

use crate::error::{CoreError, CoreResult};
use crate::numeric::{nearly_equal, Real, CHANGE_TOL, DEGENERACY_EPS};

/// Rated limits of a synchronous machine.
///
/// Immutable by convention: adjusting a rating means building a new value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineLimits {
    /// Apparent power rating (MVA)
    pub s_rated_mva: Real,
    /// Maximum active power (MW)
    pub p_max_mw: Real,
    /// Maximum reactive power magnitude (MVAr)
    pub q_max_mvar: Real,
}

impl MachineLimits {
    /// Create validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if any rating is non-finite or not strictly positive.
    pub fn new(s_rated_mva: Real, p_max_mw: Real, q_max_mvar: Real) -> CoreResult<Self> {
        let limits = Self {
            s_rated_mva,
            p_max_mw,
            q_max_mvar,
        };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> CoreResult<()> {
        for (what, value) in [
            ("S_rated_MVA", self.s_rated_mva),
            ("P_max_MW", self.p_max_mw),
            ("Q_max_MVAr", self.q_max_mvar),
        ] {
            crate::ensure_finite(value, what)?;
            if value <= 0.0 {
                return Err(CoreError::NonPositive { what, value });
            }
        }
        Ok(())
    }

    /// Same machine with a different apparent power rating.
    pub fn with_rating(self, s_rated_mva: Real) -> Self {
        Self {
            s_rated_mva,
            ..self
        }
    }

    /// Restrict `p` to `[0, P_max]`.
    pub fn clamp_p(&self, p: Real) -> (Real, bool) {
        let limited = p.min(self.p_max_mw).max(0.0);
        (limited, !nearly_equal(limited, p, CHANGE_TOL))
    }

    /// Restrict `q` to `[-Q_max, +Q_max]`.
    pub fn clamp_q(&self, q: Real) -> (Real, bool) {
        let limited = q.min(self.q_max_mvar).max(-self.q_max_mvar);
        (limited, !nearly_equal(limited, q, CHANGE_TOL))
    }

    /// Project `(p, q)` radially onto the rating circle if it lies outside.
    ///
    /// Scaling both components by the same factor keeps the angle, and with it
    /// the power factor, of the requested point.
    pub fn clamp_s(&self, p: Real, q: Real) -> (Real, Real, bool) {
        let s_squared = p * p + q * q;
        if s_squared <= self.s_rated_mva * self.s_rated_mva + DEGENERACY_EPS {
            return (p, q, false);
        }

        if s_squared <= DEGENERACY_EPS {
            return (0.0, 0.0, true);
        }

        let scale = self.s_rated_mva / s_squared.sqrt();
        (p * scale, q * scale, true)
    }

    /// True when `(p, q)` satisfies all three constraints.
    pub fn contains(&self, p: Real, q: Real) -> bool {
        !self.clamp_p(p).1 && !self.clamp_q(q).1 && !self.clamp_s(p, q).2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> MachineLimits {
        MachineLimits::new(50.0, 50.0, 35.0).unwrap()
    }

    #[test]
    fn new_rejects_non_positive_ratings() {
        assert!(matches!(
            MachineLimits::new(0.0, 50.0, 35.0),
            Err(CoreError::NonPositive { what: "S_rated_MVA", .. })
        ));
        assert!(MachineLimits::new(50.0, -1.0, 35.0).is_err());
        assert!(matches!(
            MachineLimits::new(50.0, 50.0, f64::INFINITY),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn clamp_q_spec_cases() {
        let l = limits();
        assert_eq!(l.clamp_q(0.0), (0.0, false));
        assert_eq!(l.clamp_q(l.q_max_mvar + 10.0), (l.q_max_mvar, true));
        assert_eq!(l.clamp_q(-l.q_max_mvar - 10.0), (-l.q_max_mvar, true));
    }

    #[test]
    fn clamp_p_is_one_sided() {
        let l = limits();
        assert_eq!(l.clamp_p(-5.0), (0.0, true));
        assert_eq!(l.clamp_p(25.0), (25.0, false));
        assert_eq!(l.clamp_p(80.0), (50.0, true));
    }

    #[test]
    fn clamp_below_tolerance_is_not_reported() {
        let l = limits();
        let (p, changed) = l.clamp_p(50.0 + 1e-8);
        assert_eq!(p, 50.0);
        assert!(!changed);
    }

    #[test]
    fn clamp_s_keeps_inside_points() {
        let l = limits();
        assert_eq!(l.clamp_s(40.0, 30.0), (40.0, 30.0, false));
        assert_eq!(l.clamp_s(0.0, 0.0), (0.0, 0.0, false));
    }

    #[test]
    fn clamp_s_projects_radially() {
        let l = limits();
        let (p, q, changed) = l.clamp_s(80.0, 60.0);
        assert!(changed);
        assert!((p - 40.0).abs() < 1e-9);
        assert!((q - 30.0).abs() < 1e-9);
    }

    #[test]
    fn with_rating_only_changes_s() {
        let l = limits().with_rating(80.0);
        assert_eq!(l.s_rated_mva, 80.0);
        assert_eq!(l.p_max_mw, 50.0);
        assert_eq!(l.q_max_mvar, 35.0);
    }

    #[test]
    fn contains_checks_every_constraint() {
        let l = limits();
        assert!(l.contains(40.0, 30.0));
        assert!(!l.contains(40.0, -36.0));
        assert!(!l.contains(-1.0, 0.0));
        assert!(!l.contains(45.0, 30.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn inside_points_are_untouched(
            s in 1.0_f64..200.0,
            r in 0.0_f64..1.0,
            theta in -std::f64::consts::PI..std::f64::consts::PI,
        ) {
            let l = MachineLimits { s_rated_mva: s, p_max_mw: s, q_max_mvar: s };
            let p = s * r * theta.cos();
            let q = s * r * theta.sin();
            let (p2, q2, changed) = l.clamp_s(p, q);
            prop_assert!(!changed);
            prop_assert_eq!(p2, p);
            prop_assert_eq!(q2, q);
        }

        #[test]
        fn outside_points_land_on_circle_at_same_angle(
            s in 1.0_f64..200.0,
            r in 1.01_f64..10.0,
            theta in -std::f64::consts::PI..std::f64::consts::PI,
        ) {
            let l = MachineLimits { s_rated_mva: s, p_max_mw: s, q_max_mvar: s };
            let p = s * r * theta.cos();
            let q = s * r * theta.sin();
            let (p2, q2, changed) = l.clamp_s(p, q);
            prop_assert!(changed);
            prop_assert!((p2.hypot(q2) - s).abs() <= 1e-9 * s);
            prop_assert!((q2.atan2(p2) - q.atan2(p)).abs() <= 1e-9);
        }

        #[test]
        fn projections_are_idempotent(
            p in -500.0_f64..500.0,
            q in -500.0_f64..500.0,
        ) {
            let l = MachineLimits { s_rated_mva: 50.0, p_max_mw: 50.0, q_max_mvar: 35.0 };
            let (p1, _) = l.clamp_p(p);
            prop_assert_eq!(l.clamp_p(p1), (p1, false));
            let (q1, _) = l.clamp_q(q);
            prop_assert_eq!(l.clamp_q(q1), (q1, false));
            let (ps, qs, _) = l.clamp_s(p, q);
            prop_assert!(!l.clamp_s(ps, qs).2);
        }
    }
}
