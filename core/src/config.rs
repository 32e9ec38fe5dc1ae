//! Client configuration.
//!
//! Read from a TOML file, e.g.
//!
//! ```toml
//! base_url = "http://localhost:8000"
//! status_display_secs = 3
//! ```
//!
//! Missing keys take their defaults. `TODO_API_URL` in the environment
//! overrides `base_url`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const BASE_URL_ENV: &str = "TODO_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the `/todos` resource.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How long a status message stays visible.
    #[serde(default = "default_status_display_secs")]
    pub status_display_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_status_display_secs() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            status_display_secs: default_status_display_secs(),
        }
    }
}

impl Config {
    /// Load from `path` (defaults if `None`), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    pub fn status_display(&self) -> Duration {
        Duration::from_secs(self.status_display_secs)
    }
}
