//! Helpers shared across CLI commands.

use std::path::Path;

use clip_cache::clip::{AchievementFlags, Clip};
use clip_cache::config::ConfigFile;
use clip_cache::logging::{init_logging, LoggingGuard};

use crate::error::CliError;

/// Load the configuration at `path`, falling back to defaults when absent.
pub fn load_config(path: &Path) -> Result<ConfigFile, CliError> {
    Ok(ConfigFile::load_from(path)?)
}

/// Start file and stderr logging as configured.
pub fn start_logging(config: &ConfigFile) -> Result<LoggingGuard, CliError> {
    init_logging(&config.logging.directory, &config.logging.file)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

/// One-line summary of a clip.
pub fn describe_clip(clip: &Clip) -> String {
    format!("[{}] {}", clip.id, clip.sentence.text)
}

/// Messages for the toasts a set of flags asks to show.
pub fn toast_messages(flags: &AchievementFlags) -> Vec<&'static str> {
    let mut messages = Vec::new();
    if flags.show_first_contribution_toast {
        messages.push("First contribution to the challenge!");
    }
    if flags.has_earned_session_toast {
        messages.push("Session goal reached!");
    }
    if flags.show_first_streak_toast {
        messages.push("Streak started!");
    }
    messages
}
