pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use self::core::emotion_client::EmotionClient;
pub use domain::model::{DetectionResult, Emotion, EmotionScores};
pub use domain::ports::{ConfigProvider, EmotionDetector};
pub use server::{create_router, AppState, EmotionServer};
pub use utils::error::{EmotionError, Result};
