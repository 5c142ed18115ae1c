//! clip-cache CLI - Command-line validation client
//!
//! Fetches clips for a locale and lets a contributor vote on them from the
//! terminal, using the clip-cache library against a real backend.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clip_cache::config::config_file_path;

use commands::config::ConfigCommands;
use error::CliError;

#[derive(Parser)]
#[command(name = "clip-cache")]
#[command(version = clip_cache::VERSION)]
#[command(about = "Validate crowdsourced voice clips from the terminal", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.clip-cache/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refill the clip queue once and print it
    Queue {
        /// Locale to fetch clips for (default: [session] locale)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Validate clips interactively
    ///
    /// Shows the current sentence and reads one answer per line:
    /// y (valid), n (invalid), s (skip), q (quit).
    Session {
        /// Locale to validate (default: [session] locale)
        #[arg(long)]
        locale: Option<String>,
    },

    /// List contributable locales
    Locales,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        e.exit();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);

    match cli.command {
        Commands::Queue { locale } => commands::queue::run(&config_path, locale.as_deref()).await,
        Commands::Session { locale } => {
            commands::session::run(&config_path, locale.as_deref()).await
        }
        Commands::Locales => commands::locales::run(&config_path),
        Commands::Config { command } => commands::config::run(&config_path, command),
    }
}
