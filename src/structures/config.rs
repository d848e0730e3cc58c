use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use crate::{ingestion::SeedNetwork, structures::PathLimits};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_level: Option<String>,
    pub network: NetworkConfig,
    #[serde(default)]
    pub default_routing: RoutingDefaultConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    pub inputs: Vec<Ingestor>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "ingestor")]
pub enum Ingestor {
    #[serde(rename = "seed/yaml")]
    SeedYaml(SeedYamlIngestor),
    #[serde(rename = "seed/inline")]
    SeedInline(SeedInlineIngestor),
}

#[derive(Debug, Deserialize)]
pub struct SeedYamlIngestor {
    pub name: String,
    pub url: String,
    pub phase: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct SeedInlineIngestor {
    pub name: String,
    pub phase: Option<u8>,
    #[serde(flatten)]
    pub network: SeedNetwork,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoutingDefaultConfig {
    pub max_paths: Option<usize>,
    pub max_hops: Option<usize>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AccountsConfig {
    pub starting_balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for RoutingDefaultConfig {
    fn default() -> Self {
        RoutingDefaultConfig {
            max_paths: Some(1000),
            max_hops: Some(32),
            timeout_ms: Some(2000),
        }
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        AccountsConfig {
            starting_balance: 50.0,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl RoutingDefaultConfig {
    /// Limits for a search starting now. Explicit values override the
    /// configured ones.
    pub fn limits(&self, max_paths: Option<usize>, max_hops: Option<usize>) -> PathLimits {
        let limits = PathLimits {
            max_paths: max_paths.or(self.max_paths),
            max_hops: max_hops.or(self.max_hops),
            deadline: None,
        };
        match self.timeout_ms {
            Some(ms) => limits.with_timeout(Duration::from_millis(ms)),
            None => limits,
        }
    }
}

impl Ingestor {
    pub fn label(&self) -> &str {
        match self {
            Ingestor::SeedYaml(c) => &c.name,
            Ingestor::SeedInline(c) => &c.name,
        }
    }

    pub fn phase(&self) -> u8 {
        match self {
            Ingestor::SeedYaml(i) => i.phase.unwrap_or(0),
            Ingestor::SeedInline(i) => i.phase.unwrap_or(1),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))
            .and_then(|content| Config::parse(&content))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        serde_yml::from_str(content).map_err(|e| format!("Failed to parse config: {e}"))
    }
}
