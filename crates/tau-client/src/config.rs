use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::http::DEFAULT_TIMEOUT_SECS;

const APP_NAME: &str = "tau-client";
const CONFIG_FILE: &str = "config.json";

/// Connection settings shared by the TAU and Helix clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub token: String,
    /// Use https instead of http
    #[serde(default)]
    pub secure: bool,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_port() -> u16 {
    8000
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16, token: impl Into<String>, secure: bool) -> Self {
        Self {
            host: host.into(),
            port,
            token: token.into(),
            secure,
            timeout_secs: default_timeout(),
        }
    }

    /// Parses a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded client config");
        Self::from_json_str(&contents)
    }

    /// Returns `<config dir>/tau-client/config.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(APP_NAME)
            .join(CONFIG_FILE))
    }

    /// Checks that the settings can produce a working client
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::BlankHost);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::BlankToken);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns `scheme://host:port`
    pub fn origin(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host.trim(), self.port)
    }
}
