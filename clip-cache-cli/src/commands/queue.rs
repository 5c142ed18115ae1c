//! One-shot refill command.

use std::path::Path;

use clip_cache::coordinator::RefillOutcome;
use clip_cache::session;

use super::common::{describe_clip, load_config, start_logging};
use crate::error::CliError;

/// Refill the queue for `locale` once and print what it holds.
pub async fn run(config_path: &Path, locale: Option<&str>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let _logging = start_logging(&config)?;

    let coordinator = session::connect(&config, locale).await?;
    let outcome = coordinator.refill_cache().await?;

    match outcome {
        RefillOutcome::Skipped { queued } => {
            println!("Queue already holds {} clips, nothing fetched", queued)
        }
        RefillOutcome::Refilled {
            fetched,
            prewarm_failures,
        } => {
            println!("Fetched {} clips", fetched);
            if prewarm_failures > 0 {
                println!("  ({} audio files could not be prewarmed)", prewarm_failures);
            }
        }
        RefillOutcome::SoftFailed => println!("Backend unreachable, queue unchanged"),
    }

    let state = coordinator.store().local_clips();
    println!();
    println!("Locale: {}", coordinator.store().locale());
    match &state.next {
        Some(clip) => println!("Current: {}", describe_clip(clip)),
        None => println!("Current: (none)"),
    }
    println!("Queued:  {}", state.clips.len());
    for clip in &state.clips {
        println!("  {}", describe_clip(clip));
    }

    Ok(())
}
