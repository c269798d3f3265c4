use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Below this magnitude a point is treated as the origin.
pub const DEGENERACY_EPS: Real = 1e-9;

/// Absolute/relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

/// Decides whether a clamp actually moved its input (and so deserves a message).
pub const CHANGE_TOL: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 1e-6,
};

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Clamp a percentage value to [0, 100].
#[inline]
pub fn clamp_percent(value: Real) -> Real {
    value.clamp(0.0, 100.0)
}
