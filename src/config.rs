//! Runtime configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line flags (applied by the binary through [`Settings::with_api_url`]
//! and [`Settings::with_timeout_secs`]).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Endpoint serving the template catalog
pub const DEFAULT_API_URL: &str = "https://resend-template-backend.vercel.app/api/templates/";

const APP_DIR: &str = "template-catalog";
const CONFIG_FILE: &str = "config.toml";
const PREFERENCES_FILE: &str = "preferences.json";

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: Url,
    /// Request timeout; none unless configured
    pub timeout_secs: Option<u64>,
    pub preferences_path: PathBuf,
}

/// Shape of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
    preferences_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout_secs: None,
            preferences_path: app_dir().join(PREFERENCES_FILE),
        }
    }
}

impl Settings {
    /// Load settings, reading `path` if given or the per-user config file if
    /// it exists. An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = Self::default();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings.merge_file(path)
            }
            None => {
                let default_path = default_config_path();
                if default_path.exists() {
                    settings.merge_file(&default_path)
                } else {
                    debug!(path = %default_path.display(), "No config file, using defaults");
                    Ok(settings)
                }
            }
        }
    }

    fn merge_file(mut self, path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Reading config file");
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;

        if let Some(api_url) = file.api_url {
            self = self.with_api_url(&api_url)?;
        }
        if let Some(timeout_secs) = file.timeout_secs {
            self = self.with_timeout_secs(timeout_secs)?;
        }
        if let Some(preferences_path) = file.preferences_path {
            self.preferences_path = preferences_path;
        }

        Ok(self)
    }

    /// Override the catalog endpoint; only http and https are accepted
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        let url = Url::parse(api_url)
            .map_err(|e| Error::config(format!("Invalid api_url '{}': {}", api_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::config(format!(
                "api_url must use http or https, got: {}",
                url.scheme()
            )));
        }
        self.api_url = url;
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Result<Self> {
        if timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        self.timeout_secs = Some(timeout_secs);
        Ok(self)
    }

    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = path.into();
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Per-user directory for config and preferences, falling back to the
/// current directory when the platform has no config dir
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}
