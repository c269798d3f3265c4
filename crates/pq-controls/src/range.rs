//! Linear percentage range.

use pq_core::clamp_percent;

/// Linear map between a percentage in `[0, 100]` and `[min_value, max_value]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerRange {
    pub min_value: f64,
    pub max_value: f64,
}

impl ControllerRange {
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Value for `percent`; the percentage is clamped to `[0, 100]` first.
    pub fn scale(&self, percent: f64) -> f64 {
        let pct = clamp_percent(percent) / 100.0;
        self.min_value + pct * self.span()
    }

    /// Percentage for `value`, clamped to `[0, 100]`. An empty range maps to 0.
    pub fn percent_of(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        clamp_percent((value - self.min_value) / span * 100.0)
    }
}
