// HTTP routes configuration

use super::handlers::{analyze_camera_handler, index_handler, test_handler};
use super::middleware::request_id_layers;
use crate::config::AppConfig;
use crate::error::Result;
use crate::upstream::UpstreamClient;
use axum::extract::DefaultBodyLimit;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size. Two uploaded images per request; generous
/// headroom over typical camera frames.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub upstream: Arc<UpstreamClient>,
}

pub fn create_router(config: AppConfig) -> Result<Router> {
    let upstream = UpstreamClient::new(&config.upstream)?;
    let state = AppState {
        config,
        upstream: Arc::new(upstream),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/test", get(test_handler))
        .route("/analyze_camera", post(analyze_camera_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(tower_http::limit::RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
