pub mod toml_config;

use crate::core::emotion_client::{DEFAULT_API_ENDPOINT, DEFAULT_MODEL_ID};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "emotion-detector")]
#[command(about = "Web service that scores text for anger, disgust, fear, joy and sadness")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL_ID)]
    pub model_id: String,

    /// TOML file; replaces the values above when given
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_non_empty_string("host", config.host())?;
    validate_range("port", config.port(), 1, u16::MAX)?;
    validate_url("api_endpoint", config.api_endpoint())?;
    validate_non_empty_string("model_id", config.model_id())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["emotion-detector"]);

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 5000);
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.model_id(), DEFAULT_MODEL_ID);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "emotion-detector",
            "--port",
            "8080",
            "--api-endpoint",
            "http://localhost:9000/predict",
            "--verbose",
        ]);

        assert_eq!(config.port(), 8080);
        assert_eq!(config.api_endpoint(), "http://localhost:9000/predict");
        assert!(config.verbose);
    }

    #[test]
    fn test_cli_validation_rejects_bad_values() {
        let config = CliConfig {
            api_endpoint: "not-a-url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            model_id: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
