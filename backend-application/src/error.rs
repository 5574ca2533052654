use backend_domain::{PayloadError, PersistenceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid payload")]
    InvalidPayload(#[source] PayloadError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
