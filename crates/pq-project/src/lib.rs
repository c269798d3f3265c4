//! pq-project: configuration file format, environment overrides and validation.

pub mod overrides;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use overrides::{ConfigWarning, ENV_P_MAX, ENV_Q_MAX, ENV_S_RATED, apply_overrides};
pub use schema::*;
pub use validate::{ValidationError, validate_config};

/// Configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration together with everything the loader had to fall back on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub warnings: Vec<ConfigWarning>,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parse a configuration file; JSON for `.json`, YAML otherwise.
pub fn read_config(path: &Path) -> ConfigResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(config)
}

pub fn save_config(path: &Path, config: &AppConfig) -> ConfigResult<()> {
    validate_config(config)?;
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        serde_yaml::to_string(config)?
    };
    std::fs::write(path, content)?;
    Ok(())
}

/// Load configuration from `path` (or [`DEFAULT_CONFIG_PATH`]) with process
/// environment overrides.
pub fn load_config(path: Option<&Path>) -> LoadedConfig {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration, resolving `PQT_*` overrides through `lookup`.
///
/// A missing file silently yields defaults; an unreadable one yields defaults
/// and a warning. The returned ratings are always positive and finite.
pub fn load_config_with_env<F>(path: Option<&Path>, lookup: F) -> LoadedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let mut warnings = Vec::new();

    let mut config = AppConfig::default();
    if path.exists() {
        match read_config(path) {
            Ok(parsed) => config = parsed,
            Err(err) => {
                let file = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                warnings.push(ConfigWarning::ReadFailed {
                    file,
                    reason: err.to_string(),
                });
            }
        }
    }

    warnings.extend(apply_overrides(&mut config, lookup));
    for warning in &warnings {
        tracing::warn!(path = %path.display(), "{warning}");
    }

    LoadedConfig { config, warnings }
}
