use crate::domain::model::DetectionResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn api_endpoint(&self) -> &str;
    fn model_id(&self) -> &str;
}

/// Anything able to score a piece of text.
///
/// Upstream rejections and unparseable answers come back as
/// `Ok(DetectionResult::absent())`; only transport failures are `Err`.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    async fn detect(&self, text: &str) -> Result<DetectionResult>;
}
