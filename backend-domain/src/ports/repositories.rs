use async_trait::async_trait;

use crate::error::PersistenceError;

/// Stores one webhook payload as one event row.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Inserts exactly one row derived from `payload_json`, or none on failure.
    async fn persist(&self, payload_json: &str) -> Result<(), PersistenceError>;

    /// Round-trip to the warehouse without touching the event table.
    async fn ping(&self) -> Result<(), PersistenceError>;
}
