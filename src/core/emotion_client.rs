use crate::core::{ConfigProvider, DetectionResult, EmotionDetector, EmotionScores};
use crate::utils::error::{EmotionError, Result};
use crate::utils::validation::validate_range;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

#[derive(Debug, Serialize)]
struct EmotionPredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmotionPredictResponse {
    emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Deserialize)]
struct EmotionPrediction {
    emotion: EmotionScores,
}

/// Extract the five scores from an `EmotionPredict` response body.
///
/// Only the first prediction is read. Missing or `null` labels stay absent;
/// a present score outside `[0, 1]` makes the whole body malformed.
pub fn parse_emotion_response(body: &str) -> Result<EmotionScores> {
    let response: EmotionPredictResponse = serde_json::from_str(body)?;

    let scores = response
        .emotion_predictions
        .into_iter()
        .next()
        .map(|prediction| prediction.emotion)
        .ok_or_else(|| EmotionError::MalformedResponse {
            message: "emotionPredictions is empty".to_string(),
        })?;

    for (emotion, score) in scores.entries() {
        if let Some(score) = score {
            validate_range(emotion.as_str(), score, 0.0, 1.0).map_err(|e| {
                EmotionError::MalformedResponse {
                    message: e.to_string(),
                }
            })?;
        }
    }

    Ok(scores)
}

/// HTTP client for the Watson `EmotionPredict` endpoint.
#[derive(Debug, Clone)]
pub struct EmotionClient {
    client: Client,
    endpoint: String,
    model_id: String,
}

impl EmotionClient {
    pub fn new(endpoint: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model_id: model_id.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.api_endpoint(), config.model_id())
    }

    /// Send `text` to the classifier.
    ///
    /// Transport errors propagate. A 400 from upstream, any status other
    /// than 200, or a body that cannot be parsed yields an all-absent result.
    pub async fn detect(&self, text: &str) -> Result<DetectionResult> {
        tracing::debug!("Sending emotion request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(MODEL_ID_HEADER, &self.model_id)
            .json(&EmotionPredictRequest {
                raw_document: RawDocument { text },
            })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Emotion API response status: {}", status);

        match status {
            StatusCode::BAD_REQUEST => {
                tracing::debug!("Emotion API rejected the text");
                Ok(DetectionResult::absent())
            }
            StatusCode::OK => {
                let body = response.text().await?;
                match parse_emotion_response(&body) {
                    Ok(scores) => Ok(DetectionResult::from_scores(scores)),
                    Err(e) => {
                        tracing::warn!("Error parsing emotion response: {}", e);
                        Ok(DetectionResult::absent())
                    }
                }
            }
            other => {
                tracing::warn!("Unexpected emotion API status: {}", other);
                Ok(DetectionResult::absent())
            }
        }
    }
}

impl Default for EmotionClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_ENDPOINT, DEFAULT_MODEL_ID)
    }
}

#[async_trait]
impl EmotionDetector for EmotionClient {
    async fn detect(&self, text: &str) -> Result<DetectionResult> {
        EmotionClient::detect(self, text).await
    }
}
