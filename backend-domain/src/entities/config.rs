// Resolved configuration handed to the core once at startup

use crate::value_objects::TableName;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

/// Everything needed to open a warehouse connection and address the event table.
#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
    pub clickhouse_role: Option<String>,
    pub table: TableName,
}
