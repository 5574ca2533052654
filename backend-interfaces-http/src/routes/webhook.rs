use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{ops_handlers, webhook_handlers};

pub fn build_router(state: AppState) -> Router {
    let body_limit = usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX);
    Router::new()
        .route("/", post(webhook_handlers::receive_webhook))
        .route("/health/live", get(ops_handlers::health_live))
        .route("/health/ready", get(ops_handlers::health_ready))
        .route("/metrics", get(ops_handlers::metrics_prometheus))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
