use thiserror::Error;

/// Errors raised when page configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("selector `{field}` must not be empty")]
    EmptySelector { field: &'static str },
    #[error("{field} must be a finite value of at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: f64,
        value: f64,
    },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("root margin `{field}` must not be empty")]
    EmptyRootMargin { field: &'static str },
    #[error("config JSON could not be parsed: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
