//! HTTP surface: a two-route router built once at startup.

pub mod handlers;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;

use crate::gateway::EmotionGateway;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<EmotionGateway>,
}

pub fn router(gateway: Arc<EmotionGateway>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/emotionDetector", get(handlers::emotion_detector))
        .with_state(AppState { gateway })
}
