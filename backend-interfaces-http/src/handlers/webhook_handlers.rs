use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use backend_application::commands::ingest_commands;
use backend_application::AppState;

use crate::error::HttpError;

#[derive(Serialize)]
pub struct WebhookAccepted {
    status: &'static str,
}

pub async fn receive_webhook(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WebhookAccepted>, HttpError> {
    let body = body.map_err(|rejection| {
        warn!("failed to read webhook body: {}", rejection.body_text());
        HttpError::Rejected(rejection.status(), rejection.body_text())
    })?;
    ingest_commands::process_webhook(&state, &body).await?;
    Ok(Json(WebhookAccepted { status: "success" }))
}
