use thiserror::Error;

/// Errors raised by the aspect/projection core and its configuration surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid configuration for {field}: {value} ({reason})")]
    InvalidConfiguration {
        field: String,
        value: f64,
        reason: String,
    },
    #[error("Duplicate point name in assembled chart: {0}")]
    DuplicatePointName(String),
    #[error("Duplicate aspect label in catalog: {0}")]
    DuplicateAspectLabel(String),
    #[error("Unknown aspect: {label}. Known aspects: {known:?}")]
    UnknownAspect { label: String, known: Vec<String> },
    #[error("Failed to parse chart configuration: {0}")]
    ConfigParse(String),
    #[error("Failed to read chart configuration at {path}: {message}")]
    ConfigIo { path: String, message: String },
}

impl ChartError {
    pub(crate) fn invalid(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        ChartError::InvalidConfiguration {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }
}
