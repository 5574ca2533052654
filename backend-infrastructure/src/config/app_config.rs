use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, warn};

use backend_domain::{RuntimeConfig, TableName, WarehouseConfig};

use crate::config::validation::validate_clickhouse_url;

pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
    pub clickhouse_role: Option<String>,
    pub table: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            clickhouse_url: "http://127.0.0.1:8123".to_string(),
            clickhouse_database: "default".to_string(),
            clickhouse_user: None,
            clickhouse_password: None,
            clickhouse_role: None,
            table: "webhook_events".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Resolves the process configuration: `.env`, then the optional TOML file,
    /// then environment overrides.
    pub async fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("loaded environment from {}", path.display());
        }

        let path = env::var("HOOKHOUSE_CONFIG").unwrap_or_else(|_| "./hookhouse.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            if env::var("HOOKHOUSE_CONFIG").is_ok() {
                warn!("{} not found, using defaults", path);
            }
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        for value in [
            &mut self.clickhouse_user,
            &mut self.clickhouse_password,
            &mut self.clickhouse_role,
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *value = None;
            }
        }
        self.bind_host = self.bind_host.trim().to_string();
        self.clickhouse_url = self.clickhouse_url.trim().to_string();
        self.clickhouse_database = self.clickhouse_database.trim().to_string();
        self.table = self.table.trim().to_string();
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind address: {}", err))?;
        validate_clickhouse_url(&self.clickhouse_url)?;
        if self.clickhouse_database.is_empty() {
            return Err(anyhow!("clickhouse_database must not be empty"));
        }
        TableName::parse(&self.table)?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_warehouse_config(&self) -> Result<WarehouseConfig> {
        Ok(WarehouseConfig {
            clickhouse_url: self.clickhouse_url.clone(),
            clickhouse_database: self.clickhouse_database.clone(),
            clickhouse_user: self.clickhouse_user.clone(),
            clickhouse_password: self.clickhouse_password.clone(),
            clickhouse_role: self.clickhouse_role.clone(),
            table: TableName::parse(&self.table)?,
        })
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| env::var(key).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("HOOKHOUSE_BIND_HOST") {
            self.bind_host = value;
        }
        if let Some(value) = lookup("APP_PORT") {
            self.port = value.trim().parse().unwrap_or(self.port);
        }
        if let Some(value) = lookup("HOOKHOUSE_CLICKHOUSE_URL") {
            self.clickhouse_url = value;
        }
        if let Some(value) = lookup("HOOKHOUSE_CLICKHOUSE_DATABASE") {
            self.clickhouse_database = value;
        }
        if let Some(value) = lookup("HOOKHOUSE_CLICKHOUSE_USER") {
            self.clickhouse_user = Some(value);
        }
        if let Some(value) = lookup("HOOKHOUSE_CLICKHOUSE_PASSWORD") {
            self.clickhouse_password = Some(value);
        }
        if let Some(value) = lookup("HOOKHOUSE_CLICKHOUSE_ROLE") {
            self.clickhouse_role = Some(value);
        }
        if let Some(value) = lookup("HOOKHOUSE_TABLE") {
            self.table = value;
        }
        if let Some(value) = lookup("HOOKHOUSE_MAX_BODY_BYTES") {
            self.max_body_bytes = value.trim().parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("HOOKHOUSE_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds =
                value.trim().parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn overridden(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = AppConfig::default();
        config.apply_overrides_from(|key| vars.get(key).cloned());
        config.normalize();
        config
    }

    #[test]
    fn defaults_listen_on_port_4000() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn environment_overrides_every_connection_field() {
        let config = overridden(&[
            ("APP_PORT", "40000"),
            ("HOOKHOUSE_CLICKHOUSE_URL", "https://ch.example.com:8443"),
            ("HOOKHOUSE_CLICKHOUSE_DATABASE", "MY_DB"),
            ("HOOKHOUSE_CLICKHOUSE_USER", "ROYD"),
            ("HOOKHOUSE_CLICKHOUSE_PASSWORD", "secret"),
            ("HOOKHOUSE_CLICKHOUSE_ROLE", "writer"),
            ("HOOKHOUSE_TABLE", "FRONTEGG_EVENTS"),
        ]);
        config.validate().expect("valid");

        assert_eq!(config.to_runtime_config().bind_addr, "0.0.0.0:40000");
        let warehouse = config.to_warehouse_config().expect("warehouse config");
        assert_eq!(warehouse.clickhouse_url, "https://ch.example.com:8443");
        assert_eq!(warehouse.clickhouse_database, "MY_DB");
        assert_eq!(warehouse.clickhouse_user.as_deref(), Some("ROYD"));
        assert_eq!(warehouse.clickhouse_password.as_deref(), Some("secret"));
        assert_eq!(warehouse.clickhouse_role.as_deref(), Some("writer"));
        assert_eq!(warehouse.table.as_str(), "FRONTEGG_EVENTS");
    }

    #[test]
    fn unparseable_port_keeps_the_default() {
        let config = overridden(&[("APP_PORT", "forty")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn blank_credentials_are_treated_as_unset() {
        let config = overridden(&[
            ("HOOKHOUSE_CLICKHOUSE_USER", "  "),
            ("HOOKHOUSE_CLICKHOUSE_PASSWORD", ""),
        ]);
        assert!(config.clickhouse_user.is_none());
        assert!(config.clickhouse_password.is_none());
    }

    #[test]
    fn rejects_a_table_name_that_is_not_an_identifier() {
        let config = overridden(&[("HOOKHOUSE_TABLE", "events; DROP TABLE users")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_limits() {
        let mut config = AppConfig {
            max_body_bytes: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        config.max_body_bytes = 10;
        config.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn reads_partial_toml_over_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
port = 8080
clickhouse_url = "http://clickhouse:8123"
table = "analytics.webhook_events"
"#,
        )
        .expect("parse toml");
        assert_eq!(config.port, 8080);
        assert_eq!(config.clickhouse_database, "default");
        assert_eq!(
            config.to_warehouse_config().unwrap().table.as_str(),
            "analytics.webhook_events"
        );
    }
}
