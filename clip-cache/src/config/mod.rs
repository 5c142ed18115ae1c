//! User configuration stored in `~/.clip-cache/config.ini`.
//!
//! Settings structs live in [`settings`], constants in [`defaults`], parsing
//! in `parser`, and serialization in `writer`.
//!
//! # Example
//!
//! ```ignore
//! use clip_cache::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! let api_config = config.api_config();
//! println!("Validating {} clips", config.session.locale);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    CONFIG_DIRECTORY_NAME, DEFAULT_LOCALE, DEFAULT_LOG_DIRECTORY_NAME, DEFAULT_LOG_FILE_NAME,
};
pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use settings::{ApiSettings, CacheSettings, LocalesSettings, LoggingSettings, SessionSettings};
