use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::fetch::{DEFAULT_USER_AGENT, FetchConfig};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_lang: Option<String>,
    pub accept_invalid_certs: Option<bool>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub watch_url: Option<String>,
    pub follow_redirects: Option<bool>,
}

impl Config {
    /// Load config from ~/.config/ytdetails/config.toml if it exists
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Transport settings, with `insecure` forcing TLS verification off.
    pub fn fetch_config(&self, insecure: bool) -> FetchConfig {
        FetchConfig {
            accept_invalid_certs: insecure || self.accept_invalid_certs.unwrap_or(false),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout: self.timeout_secs.map(Duration::from_secs),
            follow_redirects: self.follow_redirects.unwrap_or(false),
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytdetails")
        .join("config.toml")
}
