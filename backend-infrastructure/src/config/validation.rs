use anyhow::{anyhow, Result};

pub fn validate_clickhouse_url(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("clickhouse_url must not be empty"));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(anyhow!("clickhouse_url must start with http:// or https://"));
    }
    Ok(())
}
