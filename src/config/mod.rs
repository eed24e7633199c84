//! Configuration management for Agendou

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::session::FileSessionStore;

/// Login endpoint used when none is configured
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login-admin";

/// Alternate login endpoint exposed by older backends
pub const LEGACY_LOGIN_PATH: &str = "/admin/login";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Agendou backend (e.g. `https://api.agendou.app`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Endpoint that exchanges credentials for a token
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Emit the `Secure` attribute when rendering the session cookie
    #[serde(default = "default_secure_cookie")]
    pub secure_cookie: bool,

    /// Where the session token is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Rows per page for list commands
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_secure_cookie() -> bool {
    true
}

fn default_page_size() -> usize {
    8
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            login_path: default_login_path(),
            timeout_secs: default_timeout_secs(),
            secure_cookie: default_secure_cookie(),
            session_file: None,
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".agendou").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path` (or the default location).
    ///
    /// A missing file yields the defaults; the base URL can still come from
    /// the environment or the command line.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to `path` (or the default location)
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply command-line/environment overrides on top of the file values
    pub fn with_overrides(mut self, api_url: Option<&str>, session_file: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = Some(url.to_string());
        }
        if let Some(file) = session_file {
            self.session_file = Some(PathBuf::from(file));
        }
        self
    }

    /// Base URL without a trailing slash, or an error if none is configured
    pub fn require_api_url(&self) -> Result<String> {
        let url = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_url must start with http:// or https://, got '{}'",
                url
            ))
            .into());
        }

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Session file location, defaulting to `~/.agendou/session.yaml`
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session_file {
            Some(path) => Ok(path.clone()),
            None => FileSessionStore::default_path(),
        }
    }
}
