//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use clip_cache::config::ConfigFileError;
use clip_cache::coordinator::CoordinatorError;
use clip_cache::locales::LocaleError;
use clip_cache::session::SessionError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or written
    Config(ConfigFileError),
    /// Locale list could not be loaded
    Locales(LocaleError),
    /// Failed to open a session
    Session(SessionError),
    /// A refill or vote failed
    Coordinator(CoordinatorError),
    /// Failed to read from the terminal
    Input(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Session(SessionError::Store(_)) => {
                eprintln!();
                eprintln!("Run 'clip-cache locales' to see which locales can be validated.");
            }
            CliError::Coordinator(CoordinatorError::Api(e)) if e.is_request_failure() => {
                eprintln!();
                eprintln!("Check that [api] base_url in your config points at a reachable backend.");
                eprintln!("Run 'clip-cache config path' to find the config file.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Locales(e) => write!(f, "Locale list error: {}", e),
            CliError::Session(e) => write!(f, "Failed to open session: {}", e),
            CliError::Coordinator(e) => write!(f, "{}", e),
            CliError::Input(e) => write!(f, "Failed to read input: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Locales(e) => Some(e),
            CliError::Session(e) => Some(e),
            CliError::Coordinator(e) => Some(e),
            CliError::Input(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<LocaleError> for CliError {
    fn from(e: LocaleError) -> Self {
        CliError::Locales(e)
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        CliError::Session(e)
    }
}

impl From<CoordinatorError> for CliError {
    fn from(e: CoordinatorError) -> Self {
        CliError::Coordinator(e)
    }
}
