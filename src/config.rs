// src/config.rs

use crate::error::ConfigError;
use crate::logging::{project_directory, PROJECT_NAME};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const CONFIG_FILE: &str = "config.json";

/// Runtime settings for talking to the validation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the backend; `/validate` and the liveness probe hang off it.
    pub base_url: Url,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

/// On-disk shape of `config.json`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL).expect("default base URL is valid"),
            request_timeout_secs: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Loads settings with precedence environment > config file > defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let file = config_path().filter(|p| p.exists());
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolves settings from an optional config file and an environment lookup.
    pub fn from_sources(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = file {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let parsed: FileConfig =
                serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            if let Some(url) = parsed.base_url {
                config.base_url = parse_base_url(&url)?;
            }
            if let Some(secs) = parsed.request_timeout_secs {
                config.request_timeout_secs = Some(positive_timeout(secs, &secs.to_string())?);
            }
            if let Some(agent) = parsed.user_agent {
                config.user_agent = agent;
            }
        }

        if let Some(url) = env(&env_key("BASE_URL")) {
            config.base_url = parse_base_url(&url)?;
        }
        if let Some(raw) = env(&env_key("TIMEOUT_SECS")) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config.request_timeout_secs = Some(positive_timeout(secs, &raw)?);
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Joins `path` onto the base URL, keeping any path prefix the base carries.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url
    }
}

pub fn config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

fn env_key(suffix: &str) -> String {
    format!("{}_{}", PROJECT_NAME.as_str(), suffix)
}

// A zero timeout would fail every upload before it starts.
fn positive_timeout(secs: u64, raw: &str) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(raw.to_string()));
    }
    Ok(secs)
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}
