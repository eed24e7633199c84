//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into a single unit so handler signatures
//! stay small.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For every option the precedence is: CLI flag > environment variable >
/// config file > default. This struct captures the CLI/env layer; config
/// file values are merged in by `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, when given on the command line or via env
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.agendou/config.yaml)
    pub config: Option<String>,

    /// Backend base URL override
    pub api_url: Option<String>,

    /// Session file override
    pub session_file: Option<String>,

    /// Verbose logging requested
    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            session_file: cli.session_file.clone(),
            debug: cli.debug,
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn session_file_ref(&self) -> Option<&str> {
        self.session_file.as_deref()
    }

    /// Output format after falling back to the config file preference
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default()
    }
}
