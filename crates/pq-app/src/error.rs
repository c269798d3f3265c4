//! Error types for the pq-app service layer.

/// Application error type shared by the CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] pq_project::ConfigError),

    #[error("Machine limits error: {0}")]
    Limits(#[from] pq_core::CoreError),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for pq-app operations.
pub type AppResult<T> = Result<T, AppError>;
