use crate::utils::error::{EmotionError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EmotionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EmotionError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EmotionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EmotionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so reject it explicitly via partial_cmp
    let in_range = value.partial_cmp(&min).is_some_and(|o| o.is_ge())
        && value.partial_cmp(&max).is_some_and(|o| o.is_le());
    if !in_range {
        return Err(EmotionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_endpoint", "https://example.com").is_ok());
        assert!(validate_url("api_endpoint", "http://127.0.0.1:5000/predict").is_ok());
        assert!(validate_url("api_endpoint", "").is_err());
        assert!(validate_url("api_endpoint", "invalid-url").is_err());
        assert!(validate_url("api_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("model_id", "emotion_aggregated").is_ok());
        assert!(validate_non_empty_string("model_id", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("joy", 0.7, 0.0, 1.0).is_ok());
        assert!(validate_range("joy", 0.0, 0.0, 1.0).is_ok());
        assert!(validate_range("joy", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("joy", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("joy", -0.1, 0.0, 1.0).is_err());
        assert!(validate_range("joy", f64::NAN, 0.0, 1.0).is_err());
        assert!(validate_range("port", 0u16, 1, u16::MAX).is_err());
    }
}
