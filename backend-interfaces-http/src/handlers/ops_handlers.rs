use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::queries::health_queries;
use backend_application::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl HealthStatus {
    fn ok() -> Self {
        Self {
            status: "ok",
            error: None,
        }
    }

    fn unavailable(error: String) -> Self {
        Self {
            status: "unavailable",
            error: Some(error),
        }
    }
}

pub async fn health_live() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

pub async fn health_ready(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);
    match timeout(timeout_duration, health_queries::check_readiness(&state)).await {
        Ok(Ok(())) => (StatusCode::OK, Json(HealthStatus::ok())),
        Ok(Err(err)) => {
            error!("ready check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::unavailable(err.to_string())),
            )
        }
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::unavailable(format!(
                    "timed out after {}s",
                    timeout_secs
                ))),
            )
        }
    }
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload)
}
