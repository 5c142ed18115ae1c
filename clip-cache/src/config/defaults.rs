//! Default values for configuration settings.

use super::file::config_directory;
use super::settings::*;
use crate::api::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS};
use crate::coordinator::DEFAULT_LOW_WATER_MARK;

/// Directory under the home directory holding config and logs.
pub const CONFIG_DIRECTORY_NAME: &str = ".clip-cache";

/// Locale validated by default.
pub const DEFAULT_LOCALE: &str = "en";

/// Log directory name inside the config directory.
pub const DEFAULT_LOG_DIRECTORY_NAME: &str = "logs";

pub const DEFAULT_LOG_FILE_NAME: &str = "clip-cache.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                timeout: DEFAULT_API_TIMEOUT_SECS,
                client_id: None,
                auth_token: None,
            },
            session: SessionSettings {
                locale: DEFAULT_LOCALE.to_string(),
            },
            cache: CacheSettings {
                low_water_mark: DEFAULT_LOW_WATER_MARK,
            },
            locales: LocalesSettings { file: None },
            logging: LoggingSettings {
                directory: config_directory().join(DEFAULT_LOG_DIRECTORY_NAME),
                file: DEFAULT_LOG_FILE_NAME.to_string(),
            },
        }
    }
}
