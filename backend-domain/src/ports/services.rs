use async_trait::async_trait;

use crate::error::PersistenceError;

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_database(&self) -> Result<(), PersistenceError>;
}
