pub mod errors;
pub mod routes;

use std::sync::Arc;
use axum::Router;
use tower_http::trace::TraceLayer;
use crate::config::DashboardConfig;
use crate::errors::DashboardError;
use crate::upstream::{UpstreamApi, UpstreamClient};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamApi>,
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn UpstreamApi>, config: DashboardConfig) -> Self {
        Self {
            upstream,
            config: Arc::new(config),
        }
    }
}

pub fn create_app_state(config: DashboardConfig) -> Result<AppState, DashboardError> {
    let client = UpstreamClient::new(&config.upstream)?;
    Ok(AppState::new(Arc::new(client), config))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(routes::dashboard::dashboard))
        .route("/api/summary", axum::routing::get(routes::summary::get_summary))
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
