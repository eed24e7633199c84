//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, session store setup, and client initialization.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::AgendouClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileSessionStore, SessionStore};

/// Context for command execution containing config, session and runtime
/// options.
///
/// The API client is built on demand: commands that only touch the local
/// session (logout, status, session cookie) work without a base URL.
pub struct CommandContext {
    /// Loaded configuration with CLI/env overrides applied
    pub config: Config,
    /// Persistent session shared with the API client
    pub session: Arc<FileSessionStore>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be parsed, or the
    /// session location cannot be determined.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_overrides(opts.api_url_ref(), opts.session_file_ref());

        let session_path = config.session_path()?;
        log::debug!("Using session file {}", session_path.display());

        let format = opts.resolve_format(&config);

        Ok(Self {
            session: Arc::new(FileSessionStore::new(session_path)),
            config,
            format,
        })
    }

    /// API client bound to this context's session.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingApiUrl` when no base URL is configured.
    pub fn client(&self) -> Result<Arc<AgendouClient>> {
        let session: Arc<dyn SessionStore> = self.session.clone();
        Ok(Arc::new(AgendouClient::from_config(&self.config, session)?))
    }

    /// Rows per page from the config file
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_context_applies_overrides() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "api_url: http://file:3001\npreferences:\n  format: json\n")
            .unwrap();

        let opts = GlobalOptions {
            config: Some(config_path.to_string_lossy().to_string()),
            api_url: Some("http://flag:3001".to_string()),
            session_file: Some(dir.path().join("s.yaml").to_string_lossy().to_string()),
            ..Default::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.config.api_url.as_deref(), Some("http://flag:3001"));
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.session.path(), dir.path().join("s.yaml"));
        assert_eq!(ctx.client().unwrap().base_url(), "http://flag:3001");
    }

    #[test]
    fn test_client_requires_api_url() {
        let dir = tempdir().unwrap();
        let opts = GlobalOptions {
            config: Some(dir.path().join("missing.yaml").to_string_lossy().to_string()),
            session_file: Some(dir.path().join("s.yaml").to_string_lossy().to_string()),
            ..Default::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert!(ctx.client().is_err());
    }
}
