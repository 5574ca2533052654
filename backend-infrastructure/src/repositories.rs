pub mod clickhouse_event_sink;
pub mod insert_sql;

pub use clickhouse_event_sink::*;
pub use insert_sql::*;
