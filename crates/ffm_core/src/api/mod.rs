//! JSON API surface
//!
//! Every endpoint takes a JSON request string and returns a JSON
//! `ApiResponse` envelope; errors never escape as panics or `Err`.

pub mod player_json;

use crate::error::{EngineError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use player_json::*;

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes and details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn with_details(
        code: &str,
        message: &str,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: Some(details) }
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        match &error {
            EngineError::OutOfRange { field, value, min, max } => {
                let mut details = HashMap::new();
                details.insert("field".to_string(), serde_json::json!(field));
                details.insert("value".to_string(), serde_json::json!(value));
                details.insert("min".to_string(), serde_json::json!(min));
                details.insert("max".to_string(), serde_json::json!(max));
                Self::with_details(error.code(), &error.to_string(), details)
            }
            _ => Self::new(error.code(), &error.to_string()),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Requests may omit `schema_version`; when present it must match `API_VERSION`.
pub fn check_schema_version(schema_version: Option<&str>) -> Result<()> {
    match schema_version {
        Some(found) if found != API_VERSION => Err(EngineError::UnsupportedSchema {
            found: found.to_string(),
            expected: API_VERSION.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version_check() {
        assert!(check_schema_version(None).is_ok());
        assert!(check_schema_version(Some("v1")).is_ok());

        let err = check_schema_version(Some("v2")).unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_SCHEMA");
    }

    #[test]
    fn test_out_of_range_error_carries_details() {
        let error = ApiError::from(EngineError::out_of_range("potential", 20.0, 40.0, 99.0));
        assert_eq!(error.code, "VALIDATION_FAILED");

        let details = error.details.expect("details for range errors");
        assert_eq!(details["field"], serde_json::json!("potential"));
        assert_eq!(details["min"], serde_json::json!(40.0));
    }

    #[test]
    fn test_error_envelope() {
        let response: ApiResponse<u64> = ApiResponse::error(ApiError::new("INVALID_JSON", "bad"));
        let value: serde_json::Value = serde_json::from_str(&response.to_json()).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["data"], serde_json::Value::Null);
        assert_eq!(value["error"]["code"], "INVALID_JSON");
        assert_eq!(value["schema_version"], "v1");
    }
}
