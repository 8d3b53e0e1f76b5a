use std::fs::read_to_string;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::models::reputation::Reputation;
use crate::models::resource::Resource;
use crate::store::seed::default_resources;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Cross-origin policy. A single `"*"` entry allows any origin; the origin is
/// mirrored back so that credentials stay allowed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    pub const ANY_ORIGIN: &'static str = "*";

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin == Self::ANY_ORIGIN)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![Self::ANY_ORIGIN.to_string()],
            allow_credentials: true,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub resources: Vec<Resource>,
    pub reputation: Reputation,
    pub progress: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            resources: default_resources(),
            reputation: Reputation {
                avg: 4.88,
                count: 48,
            },
            progress: 0,
        }
    }
}

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdStrategy {
    /// Next id is one past the highest id handed out so far.
    #[default]
    Counter,
    /// Wall-clock seconds since the epoch. Two resources created within the
    /// same second receive the same id.
    Timestamp,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    pub strategy: IdStrategy,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub seed: SeedConfig,
    pub ids: IdConfig,
}

impl AppConfig {
    pub fn from_yaml_file<P: Into<PathBuf>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.into();
        let content = read_to_string(&path).with_context(|| format!("path: {path:?}"))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config in {path:?}"))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, anyhow::Error> {
        Ok(serde_yaml::from_str(content)?)
    }
}
