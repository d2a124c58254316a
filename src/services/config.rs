//! Credentials from the shared `~/.wakatime.cfg` file

use crate::types::{Result, WakaError};
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Used when the config file has no `api_url`
pub const DEFAULT_API_URL: &str = "https://wakapi.dev/api";

const CONFIG_FILE_NAME: &str = ".wakatime.cfg";

/// Values read from the config file (both optional)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValues {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl ConfigValues {
    /// Parse `key = value` lines; section headers, comments and unknown
    /// keys are ignored. Stops scanning once both keys are known.
    pub fn parse(content: &str) -> Self {
        let mut values = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with(['#', ';', '[']) {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match key.trim() {
                "api_url" => values.api_url = Some(value.to_string()),
                "api_key" => values.api_key = Some(value.to_string()),
                _ => {}
            }

            if values.api_url.is_some() && values.api_key.is_some() {
                break;
            }
        }

        values
    }
}

/// Resolved endpoint and credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing `/`
    pub api_url: String,
    pub api_key: String,
}

impl ApiConfig {
    /// Get the default config path (~/.wakatime.cfg)
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| WakaError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs.home_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from `path` (or the default location). `api_key_override`
    /// wins over the file; a missing file is only fatal without it.
    pub fn load(path: Option<&Path>, api_key_override: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        debug!(path = %path.display(), "reading config");

        let values = match fs::read_to_string(&path) {
            Ok(content) => ConfigValues::parse(&content),
            Err(e) if api_key_override.is_some() => {
                warn!(path = %path.display(), error = %e, "config unreadable, using --api-key");
                ConfigValues::default()
            }
            Err(e) => {
                return Err(WakaError::Config(format!(
                    "failed to open config file {}: {e}",
                    path.display()
                )))
            }
        };

        Self::resolve(values, api_key_override)
    }

    /// Apply defaults and overrides to parsed file values
    pub fn resolve(values: ConfigValues, api_key_override: Option<&str>) -> Result<Self> {
        let api_key = api_key_override
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or(values.api_key)
            .ok_or_else(|| WakaError::Config("api_key not found in config".into()))?;

        let api_url = values
            .api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self { api_url, api_key })
    }
}
