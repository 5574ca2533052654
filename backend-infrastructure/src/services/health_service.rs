use std::sync::Arc;

use async_trait::async_trait;
use backend_domain::ports::{EventSink, HealthCheckService};
use backend_domain::PersistenceError;

pub struct DefaultHealthService {
    event_sink: Arc<dyn EventSink>,
}

impl DefaultHealthService {
    pub fn new(event_sink: Arc<dyn EventSink>) -> Self {
        Self { event_sink }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_database(&self) -> Result<(), PersistenceError> {
        self.event_sink.ping().await
    }
}
