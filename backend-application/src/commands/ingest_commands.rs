use tracing::{error, info, warn};

use backend_domain::WebhookPayload;

use crate::{AppError, AppState};

/// Validates a raw webhook body and hands its canonical JSON to the event sink.
/// Nothing is stored when the body is rejected or the insert fails.
pub async fn process_webhook(state: &AppState, body: &[u8]) -> Result<(), AppError> {
    state.metrics.record_request();

    let payload = WebhookPayload::from_slice(body).map_err(|err| {
        state.metrics.record_rejected();
        warn!(body_len = body.len(), "rejected webhook body: {}", err);
        AppError::InvalidPayload(err)
    })?;

    if let Err(err) = state.event_sink.persist(payload.as_json()).await {
        state.metrics.record_persist_error();
        error!(error = %err, "failed to persist webhook event");
        return Err(err.into());
    }

    state.metrics.record_persisted();
    info!(
        event_key = payload
            .lookup(&["eventKey"])
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<none>"),
        "webhook event persisted"
    );
    Ok(())
}
