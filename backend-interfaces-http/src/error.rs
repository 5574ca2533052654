use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
    /// The request body could not be read, e.g. it exceeds the size limit.
    Rejected(StatusCode, String),
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        match value {
            err @ backend_application::AppError::InvalidPayload(_) => {
                HttpError::BadRequest(err.to_string())
            }
            // Warehouse errors reach the caller verbatim.
            backend_application::AppError::Persistence(err) => {
                HttpError::Internal(err.message().to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            HttpError::Rejected(status, msg) => (status, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
