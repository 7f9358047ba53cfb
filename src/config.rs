use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "HTTPFROMTCP_CONFIG";

/// Env var overriding the listen address.
pub const LISTEN_ENV: &str = "LISTEN";

/// Process-wide settings, fixed once the server starts.
///
/// ```yaml
/// listen_addr: "0.0.0.0:42069"
/// log_level: debug
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:42069".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the file named by `HTTPFROMTCP_CONFIG` if set, then applies a
    /// `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.listen_addr = addr;
        }
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// The configured log level, falling back to `INFO` when unrecognized.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
