use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load config from {source_name}='{path}': {message}")]
    ConfigLoad { source_name: String, path: String, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Value out of range for {field}: {value} (expected {min}..={max})")]
    OutOfRange { field: String, value: f64, min: f64, max: f64 },

    #[error("Unsupported schema version: {found} (expected {expected})")]
    UnsupportedSchema { found: String, expected: String },
}

impl EngineError {
    /// Stable code used in JSON error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Io(_) => "IO_ERROR",
            EngineError::Json(_) => "INVALID_JSON",
            EngineError::ConfigLoad { .. } => "CONFIG_LOAD_FAILED",
            EngineError::InvalidConfig(_) => "INVALID_CONFIG",
            EngineError::UnknownAttribute(_) => "UNKNOWN_ATTRIBUTE",
            EngineError::OutOfRange { .. } => "VALIDATION_FAILED",
            EngineError::UnsupportedSchema { .. } => "UNSUPPORTED_SCHEMA",
        }
    }

    pub fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        EngineError::OutOfRange { field: field.to_string(), value, min, max }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
