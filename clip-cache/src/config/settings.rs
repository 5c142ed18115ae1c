//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;

/// Complete client configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub api: ApiSettings,
    pub session: SessionSettings,
    pub cache: CacheSettings,
    pub locales: LocalesSettings,
    pub logging: LoggingSettings,
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Backend origin, without a trailing slash
    pub base_url: String,
    /// Timeout in seconds for HTTP requests
    pub timeout: u64,
    /// Sent as the `client_id` header when set
    pub client_id: Option<String>,
    /// Sent as a bearer token when set
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Locale validated when the command line does not name one
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Refill is skipped while more clips than this are queued
    pub low_water_mark: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalesSettings {
    /// JSON array of locale codes; the built-in list is used when unset
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}
