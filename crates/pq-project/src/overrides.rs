//! Environment overrides and rating fallbacks.

use std::fmt;

use crate::schema::{AppConfig, DEFAULT_P_MAX_MW, DEFAULT_Q_MAX_MVAR, DEFAULT_S_RATED_MVA};

pub const ENV_S_RATED: &str = "PQT_S_RATED";
pub const ENV_P_MAX: &str = "PQT_P_MAX";
pub const ENV_Q_MAX: &str = "PQT_Q_MAX";

/// Something the loader had to paper over. Loading itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    ReadFailed { file: String, reason: String },
    UnparsableOverride { var: &'static str, value: String },
    NonPositive { field: &'static str },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { file, reason } => {
                write!(f, "Failed to read {file} ({reason}); falling back to defaults.")
            }
            Self::UnparsableOverride { var, value } => {
                write!(f, "{var}={value:?} is not a number; ignoring override.")
            }
            Self::NonPositive { field } => {
                write!(f, "{field} must be positive; using default value.")
            }
        }
    }
}

/// Apply `PQT_*` overrides from `lookup`, then replace any rating that is not
/// a positive finite number with its built-in default.
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Vec<ConfigWarning>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();
    let fields: [(&'static str, &'static str, &mut f64, f64); 3] = [
        (
            "S_rated_MVA",
            ENV_S_RATED,
            &mut config.s_rated_mva,
            DEFAULT_S_RATED_MVA,
        ),
        ("P_max_MW", ENV_P_MAX, &mut config.p_max_mw, DEFAULT_P_MAX_MW),
        (
            "Q_max_MVAr",
            ENV_Q_MAX,
            &mut config.q_max_mvar,
            DEFAULT_Q_MAX_MVAR,
        ),
    ];

    for (field, var, value, default) in fields {
        if let Some(raw) = lookup(var) {
            let parsed = raw.trim().parse::<f64>();
            match parsed {
                Ok(parsed) => *value = parsed,
                Err(_) => warnings.push(ConfigWarning::UnparsableOverride { var, value: raw }),
            }
        }
        if !value.is_finite() || *value <= 0.0 {
            warnings.push(ConfigWarning::NonPositive { field });
            *value = default;
        }
    }

    warnings
}
