use std::path::Path;

use database::DatabaseConfig;
use serde::Deserialize;

use crate::CatalogError;

/// Optional YAML settings file:
///
/// ```yaml
/// database_url: sqlite://catalog.db
/// pool_size: 8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub database_url: Option<String>,
    pub pool_size: Option<usize>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// CLI flag, then `DATABASE_URL`, then this file, then in-memory.
    pub fn database_config(&self, cli_url: Option<String>) -> DatabaseConfig {
        let config = DatabaseConfig::from_cli_or_env_or_yaml(cli_url, self.database_url.clone());
        match self.pool_size {
            Some(pool_size) => config.with_pool_size(pool_size),
            None => config,
        }
    }
}
