//! Error types for feature construction and export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Invalid type: {0}")]
    InvalidType(String),
    #[error("Unknown feature type id: {0}")]
    UnknownTypeId(u32),
    #[error("Feature {label} is missing {field}")]
    MissingField { label: String, field: &'static str },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_carries_value() {
        let err = FeatureError::InvalidType("NotAType".to_string());
        assert_eq!(err.to_string(), "Invalid type: NotAType");
        assert!(matches!(err, FeatureError::InvalidType(ref v) if v == "NotAType"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FeatureError = json_err.into();
        assert!(matches!(err, FeatureError::Json(_)));
    }
}
