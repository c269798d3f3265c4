//! Reactive power needed to hit a power factor target at fixed P.

use pq_core::MachineLimits;

/// Largest PF magnitude the solver aims for; unity would need an infinite-S ray.
const PF_CEILING: f64 = 0.999;

/// Below this PF magnitude the request is treated as pure reactive operation.
const PF_ZERO_TOL: f64 = 1e-6;

/// Solve for the Q that gives power factor `pf` at active power `p`.
///
/// `pf > 0` is lagging (positive Q), `pf < 0` is leading (negative Q). The
/// target apparent power is capped at the machine rating and the result is
/// kept inside the excitation limits and the rating circle.
///
/// Returns 0 for `pf` within `1e-6` of zero: pure reactive operation is set by
/// entering Q directly, not through this solver.
pub fn q_for_power_factor(p: f64, pf: f64, limits: &MachineLimits) -> f64 {
    if pf.abs() <= PF_ZERO_TOL {
        return 0.0;
    }

    let pf = pf.clamp(-PF_CEILING, PF_CEILING);
    let s_target = (p.abs() / pf.abs()).min(limits.s_rated_mva);
    let q_magnitude = (s_target * s_target - p * p).max(0.0).sqrt();
    let q = if pf > 0.0 { q_magnitude } else { -q_magnitude };

    let (q, _) = limits.clamp_q(q);
    let (_, q, _) = limits.clamp_s(p, q);
    q
}
