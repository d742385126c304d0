use std::path::Path;

use serde::{Deserialize, Deserializer};
use sqlx::mysql::MySqlConnectOptions;

use crate::{PopulateError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

/// Connection settings found under the `database` key.
///
/// Keys not listed here are accepted and ignored, so configuration files
/// written for other MySQL clients keep working.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
    #[serde(default)]
    pub unix_socket: Option<String>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub autocommit: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3306
}

/// Accepts any JSON value: `null`, `false`, `0`, `""`, `[]` and `{}` read as
/// false, everything else as true.
fn deserialize_truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let truthy = match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(fields) => !fields.is_empty(),
    };
    Ok(truthy)
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PopulateError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: AppConfig = serde_json::from_str(content)
            .map_err(|e| PopulateError::ConfigError(e.to_string()))?;
        config.database.validate()?;

        if !config.database.autocommit {
            tracing::debug!("Enabling autocommit for the database connection");
            config.database.autocommit = true;
        }

        Ok(config)
    }
}

impl DatabaseConfig {
    fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(PopulateError::ConfigError(
                "database.user cannot be empty".to_string(),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(PopulateError::ConfigError(
                "database.database cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database);

        if let Some(socket) = &self.unix_socket {
            options = options.socket(socket);
        }
        if let Some(charset) = &self.charset {
            options = options.charset(charset);
        }

        options
    }

    /// `user@host:port/database`, safe to log.
    pub fn display_target(&self) -> String {
        match &self.unix_socket {
            Some(socket) => format!("{}@{}/{}", self.user, socket, self.database),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database),
        }
    }
}
