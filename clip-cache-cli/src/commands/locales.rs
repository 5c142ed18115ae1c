//! Locale listing command.

use std::path::Path;

use clip_cache::locales::ContributableLocales;

use super::common::load_config;
use crate::error::CliError;

/// Print the contributable locales, marking the session default.
pub fn run(config_path: &Path) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let locales = ContributableLocales::load(config.locales.file.as_deref())?;

    match &config.locales.file {
        Some(path) => println!("Locales from {}:", path.display()),
        None => println!("Built-in locales:"),
    }
    for code in locales.codes() {
        let marker = if *code == config.session.locale { "*" } else { " " };
        println!("  {} {}", marker, code);
    }

    if !locales.contains(&config.session.locale) {
        println!();
        println!(
            "Warning: [session] locale '{}' is not in this list",
            config.session.locale
        );
    }
    Ok(())
}
