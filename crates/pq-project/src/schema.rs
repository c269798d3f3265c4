//! Configuration schema.

use pq_core::MachineLimits;
use serde::{Deserialize, Serialize};

pub const DEFAULT_S_RATED_MVA: f64 = 50.0;
pub const DEFAULT_P_MAX_MW: f64 = 50.0;
pub const DEFAULT_Q_MAX_MVAR: f64 = 35.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisLabels {
    #[serde(default = "default_x_label")]
    pub x: String,
    #[serde(default = "default_y_label")]
    pub y: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: default_x_label(),
            y: default_y_label(),
        }
    }
}

fn default_x_label() -> String {
    "Reactive Power Q [MVAr]".to_string()
}

fn default_y_label() -> String {
    "Active Power P [MW]".to_string()
}

/// Machine ratings and chart labels for a teaching session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(rename = "S_rated_MVA", default = "default_s_rated")]
    pub s_rated_mva: f64,
    #[serde(rename = "P_max_MW", default = "default_p_max")]
    pub p_max_mw: f64,
    #[serde(rename = "Q_max_MVAr", default = "default_q_max")]
    pub q_max_mvar: f64,
    #[serde(default)]
    pub labels: AxisLabels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            s_rated_mva: DEFAULT_S_RATED_MVA,
            p_max_mw: DEFAULT_P_MAX_MW,
            q_max_mvar: DEFAULT_Q_MAX_MVAR,
            labels: AxisLabels::default(),
        }
    }
}

fn default_s_rated() -> f64 {
    DEFAULT_S_RATED_MVA
}

fn default_p_max() -> f64 {
    DEFAULT_P_MAX_MW
}

fn default_q_max() -> f64 {
    DEFAULT_Q_MAX_MVAR
}

impl AppConfig {
    /// Limits described by this configuration.
    ///
    /// Built directly rather than through `MachineLimits::new`: a loaded
    /// configuration has already had non-positive ratings replaced.
    pub fn limits(&self) -> MachineLimits {
        MachineLimits {
            s_rated_mva: self.s_rated_mva,
            p_max_mw: self.p_max_mw,
            q_max_mvar: self.q_max_mvar,
        }
    }

    pub fn with_rating(&self, s_rated_mva: f64) -> Self {
        Self {
            s_rated_mva,
            ..self.clone()
        }
    }
}
