//! Configuration loading and management

use crate::core::service::GroupPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listen address of the HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Cross-origin policy of the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allow any origin, method and header
    pub permissive: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { permissive: true }
    }
}

/// Longest default group deadline accepted from configuration
pub const MAX_DEFAULT_DEADLINE_DAYS: u32 = 3650;

/// Rules for newly created groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    /// Deadline, in days, for groups created without one
    pub default_deadline_days: Option<u32>,
}

impl From<GroupsConfig> for GroupPolicy {
    fn from(config: GroupsConfig) -> Self {
        GroupPolicy {
            default_deadline_days: config.default_deadline_days,
        }
    }
}

/// Complete configuration of the marketplace server
///
/// Every section is optional; missing keys take their defaults.
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8080
/// log_filter: "bulkbite=debug,tower_http=info"
/// seed_demo_data: true
/// cors:
///   permissive: true
/// groups:
///   default_deadline_days: 7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub server: ServerConfig,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Load the demo dataset into an empty store on startup
    pub seed_demo_data: bool,

    pub cors: CorsConfig,

    pub groups: GroupsConfig,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_filter: "bulkbite=info,tower_http=info".to_string(),
            seed_demo_data: false,
            cors: CorsConfig::default(),
            groups: GroupsConfig::default(),
        }
    }
}

impl MarketConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be honored at runtime
    pub fn validate(&self) -> Result<()> {
        if let Some(days) = self.groups.default_deadline_days {
            if days == 0 || days > MAX_DEFAULT_DEADLINE_DAYS {
                anyhow::bail!(
                    "groups.default_deadline_days must be between 1 and {} (got {})",
                    MAX_DEFAULT_DEADLINE_DAYS,
                    days
                );
            }
        }
        Ok(())
    }

    /// `host:port` to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
