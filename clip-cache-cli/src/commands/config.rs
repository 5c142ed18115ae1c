//! Configuration management CLI commands.

use std::path::Path;

use clap::Subcommand;
use clip_cache::config::ConfigFile;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a commented configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(config_path: &Path, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { force } => run_init(config_path, force),
        ConfigCommands::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn run_init(config_path: &Path, force: bool) -> Result<(), CliError> {
    if force {
        ConfigFile::default().save_to(config_path)?;
    } else if !ConfigFile::ensure_exists_at(config_path)? {
        println!("Configuration already exists at {}", config_path.display());
        println!("Use --force to replace it with defaults.");
        return Ok(());
    }

    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
