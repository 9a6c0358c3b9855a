use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::{retry_with_backoff, DatabaseError};

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: usize,
}

impl DatabaseConfig {
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("DATABASE_URL") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            IN_MEMORY_URL.to_string()
        };

        Self { url, pool_size: 20 }
    }

    pub fn in_memory() -> Self {
        Self {
            url: IN_MEMORY_URL.to_string(),
            pool_size: 1,
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// True for every spelling of an in-memory database: `:memory:`,
    /// `sqlite::memory:`, `sqlite://:memory:` or any `mode=memory` URL.
    pub fn is_in_memory(&self) -> bool {
        let url = self.url.trim();
        let location = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        path == ":memory:" || query.split('&').any(|pair| pair == "mode=memory")
    }

    /// `sqlite:` URLs are handed to sqlx as-is; anything else is a file path.
    pub fn connect_options(&self) -> Result<SqliteConnectOptions, DatabaseError> {
        let options = if self.url == ":memory:" {
            SqliteConnectOptions::from_str(IN_MEMORY_URL)
        } else if self.url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(&self.url)
        } else {
            Ok(SqliteConnectOptions::new().filename(&self.url))
        }
        .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        Ok(options.create_if_missing(true))
    }

    pub async fn create_pool(&self) -> Result<SqlitePool, DatabaseError> {
        let options = self.connect_options()?;
        // Each connection to an in-memory database sees its own empty
        // database, so those pools hold exactly one connection forever.
        let pool_options = if self.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(self.pool_size.max(1) as u32)
        };

        tracing::info!("Connecting to {} (pool size {})", self.url, self.pool_size);
        retry_with_backoff(
            || {
                let pool_options = pool_options.clone();
                let options = options.clone();
                Box::pin(async move { pool_options.connect_with(options).await })
            },
            3,
            Duration::from_millis(100),
        )
        .await
        .map_err(|e| DatabaseError::Connection(e.to_string()))
    }
}
