use async_trait::async_trait;
use clickhouse::Client;
use tracing::debug;

use backend_domain::{EventSink, PersistenceError, WarehouseConfig, EVENT_COLUMNS};

use crate::repositories::insert_sql::render_insert;

/// Writes each webhook payload to ClickHouse over a connection opened for that call
/// alone. Nothing is pooled or shared between calls.
pub struct ClickhouseEventSink {
    config: WarehouseConfig,
    insert_sql: String,
}

impl ClickhouseEventSink {
    pub fn new(config: WarehouseConfig) -> Self {
        let insert_sql = render_insert(&config.table, &EVENT_COLUMNS);
        Self { config, insert_sql }
    }

    pub fn insert_sql(&self) -> &str {
        &self.insert_sql
    }
}

#[async_trait]
impl EventSink for ClickhouseEventSink {
    async fn persist(&self, payload_json: &str) -> Result<(), PersistenceError> {
        let connection = WarehouseConnection::open(&self.config);
        connection
            .client()
            .query(&self.insert_sql)
            .bind(payload_json)
            .execute()
            .await
            .map_err(to_persistence_error)
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        let connection = WarehouseConnection::open(&self.config);
        let _: u8 = connection
            .client()
            .query("SELECT toUInt8(1)")
            .fetch_one()
            .await
            .map_err(to_persistence_error)?;
        Ok(())
    }
}

/// A client scoped to one operation. Its HTTP connections are closed when the
/// guard is dropped, on success and error paths alike.
struct WarehouseConnection {
    client: Client,
}

impl WarehouseConnection {
    fn open(config: &WarehouseConfig) -> Self {
        let mut client = Client::default()
            .with_url(&config.clickhouse_url)
            .with_database(&config.clickhouse_database);
        if let Some(user) = &config.clickhouse_user {
            client = client.with_user(user);
        }
        if let Some(password) = &config.clickhouse_password {
            client = client.with_password(password);
        }
        if let Some(role) = &config.clickhouse_role {
            client = client.with_option("role", role);
        }
        debug!(url = %config.clickhouse_url, "warehouse connection opened");
        Self { client }
    }

    fn client(&self) -> &Client {
        &self.client
    }
}

impl Drop for WarehouseConnection {
    fn drop(&mut self) {
        debug!("warehouse connection released");
    }
}

fn to_persistence_error(err: clickhouse::error::Error) -> PersistenceError {
    PersistenceError::new(err.to_string())
}
