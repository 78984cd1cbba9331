use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmotionError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed emotion response: {message}")]
    MalformedResponse { message: String },
}

impl EmotionError {
    /// Short message suitable for stderr at startup.
    pub fn user_friendly_message(&self) -> String {
        match self {
            EmotionError::ApiError(e) if e.is_connect() => {
                "Could not reach the emotion service".to_string()
            }
            EmotionError::ApiError(e) if e.is_timeout() => {
                "The emotion service did not answer in time".to_string()
            }
            EmotionError::ApiError(_) => "Request to the emotion service failed".to_string(),
            EmotionError::IoError(e) => format!("File access failed: {}", e),
            EmotionError::SerializationError(_) | EmotionError::MalformedResponse { .. } => {
                "The emotion service returned an unexpected response".to_string()
            }
            EmotionError::ConfigError { message } => format!("Configuration problem: {}", message),
            EmotionError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EmotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message_names_field() {
        let err = EmotionError::InvalidConfigValueError {
            field: "upstream.endpoint".to_string(),
            value: "nope".to_string(),
            reason: "Invalid URL format".to_string(),
        };

        assert!(err.to_string().contains("upstream.endpoint"));
        assert!(err.user_friendly_message().contains("upstream.endpoint"));
    }

    #[test]
    fn test_serde_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EmotionError = parse_err.into();
        assert!(matches!(err, EmotionError::SerializationError(_)));
    }
}
