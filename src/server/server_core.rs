//! Router and server lifecycle

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::emotion_client::EmotionClient;
use crate::core::{ConfigProvider, EmotionDetector};
use crate::server::routes;
use crate::utils::error::Result;

/// State shared by every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn EmotionDetector>,
}

impl AppState {
    pub fn new(detector: Arc<dyn EmotionDetector>) -> Self {
        Self { detector }
    }
}

/// Build the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index_page))
        .route("/static/mywebscript.js", get(routes::index_script))
        .route("/emotionDetector", get(routes::analyze_emotion))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub struct EmotionServer {
    addr: String,
    state: AppState,
}

impl EmotionServer {
    pub fn new(addr: impl Into<String>, detector: Arc<dyn EmotionDetector>) -> Self {
        Self {
            addr: addr.into(),
            state: AppState::new(detector),
        }
    }

    /// Server backed by the real emotion service client.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        let client = EmotionClient::from_config(config);
        Self::new(
            format!("{}:{}", config.host(), config.port()),
            Arc::new(client),
        )
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let router = create_router(self.state);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Emotion detector listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
