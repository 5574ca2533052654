use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::{AppState, Metrics};
use backend_domain::EventSink;
use backend_infrastructure::{AppConfig, ClickhouseEventSink, DefaultHealthService};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let warehouse_config = config.to_warehouse_config()?;
        info!(
            clickhouse_url = %warehouse_config.clickhouse_url,
            clickhouse_database = %warehouse_config.clickhouse_database,
            clickhouse_user = %warehouse_config
                .clickhouse_user
                .as_deref()
                .unwrap_or("<none>"),
            clickhouse_password_set = warehouse_config.clickhouse_password.is_some(),
            table = %warehouse_config.table,
            "config loaded"
        );

        let event_sink: Arc<dyn EventSink> = Arc::new(ClickhouseEventSink::new(warehouse_config));
        let state = AppState {
            config: runtime_config,
            event_sink: event_sink.clone(),
            health_service: Arc::new(DefaultHealthService::new(event_sink)),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
