use std::sync::Arc;

use backend_domain::ports::{EventSink, HealthCheckService};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_sink: Arc<dyn EventSink>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub metrics: Arc<Metrics>,
}
