//! Configuration validation.

use crate::schema::AppConfig;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_config(config: &AppConfig) -> Result<(), ValidationError> {
    for (field, value) in rating_fields(config) {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                reason: "rating must be a positive number".to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn rating_fields(config: &AppConfig) -> [(&'static str, f64); 3] {
    [
        ("S_rated_MVA", config.s_rated_mva),
        ("P_max_MW", config.p_max_mw),
        ("Q_max_MVAr", config.q_max_mvar),
    ]
}
