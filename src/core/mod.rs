pub mod emotion_client;

pub use crate::domain::model::{DetectionResult, Emotion, EmotionScores};
pub use crate::domain::ports::{ConfigProvider, EmotionDetector};
pub use crate::utils::error::Result;
