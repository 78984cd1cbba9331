//! Request handlers

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::core::{DetectionResult, EmotionScores};
use crate::server::server_core::AppState;
use crate::utils::error::EmotionError;
use crate::utils::format::format_score;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/mywebscript.js");

const TEXT_PARAM: &str = "textToAnalyze";

/// First `textToAnalyze` value; later repeats are ignored.
fn text_param(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == TEXT_PARAM)
        .map(|(_, value)| value)
}

/// Errors surfaced to the caller as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    MissingText,
    InvalidText,
    Upstream(EmotionError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingText | ApiError::InvalidText => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::MissingText => "Missing 'textToAnalyze' parameter",
            ApiError::InvalidText => "Invalid text! Please try again!",
            ApiError::Upstream(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream(e) = &self {
            tracing::error!("Emotion service call failed: {}", e);
        }
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Sentence returned to the caller for a successful detection.
///
/// `None` unless the result carries a dominant emotion.
pub fn format_emotion_message(result: &DetectionResult) -> Option<String> {
    let dominant = result.dominant_emotion?;
    let EmotionScores {
        anger: Some(anger),
        disgust: Some(disgust),
        fear: Some(fear),
        joy: Some(joy),
        sadness: Some(sadness),
    } = result.scores
    else {
        return None;
    };

    Some(format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, \
         'fear': {}, 'joy': {}, and 'sadness': {}. The dominant emotion is {}.",
        format_score(anger),
        format_score(disgust),
        format_score(fear),
        format_score(joy),
        format_score(sadness),
        dominant
    ))
}

/// `GET /emotionDetector?textToAnalyze=...`
pub async fn analyze_emotion(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let text = match text_param(params) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::MissingText),
    };

    let result = state
        .detector
        .detect(&text)
        .await
        .map_err(ApiError::Upstream)?;

    let message = format_emotion_message(&result).ok_or(ApiError::InvalidText)?;
    tracing::debug!("Dominant emotion: {:?}", result.dominant_emotion);

    Ok(Json(json!({ "message": message })))
}

/// `GET /`
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /static/mywebscript.js`
pub async fn index_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT_JS)
}
