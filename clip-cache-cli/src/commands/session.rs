//! Interactive validation loop.
//!
//! Each round shows the current clip's sentence and reads one line:
//! `y` accepts, `n` rejects, `s` skips, `q` quits. Votes and skips return
//! as soon as the local queue is updated; refills run in the background.

use std::io::{self, BufRead, Write};
use std::path::Path;

use clip_cache::coordinator::FollowUp;
use clip_cache::session::{self, SessionCoordinator};
use tracing::warn;

use super::common::{describe_clip, load_config, start_logging, toast_messages};
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Valid,
    Invalid,
    Skip,
    Quit,
}

impl Answer {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Answer::Valid),
            "n" | "no" => Some(Answer::Invalid),
            "s" | "skip" => Some(Answer::Skip),
            "q" | "quit" => Some(Answer::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    valid: u32,
    invalid: u32,
    skipped: u32,
    failed: u32,
}

/// Run an interactive session for `locale`.
pub async fn run(config_path: &Path, locale: Option<&str>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let _logging = start_logging(&config)?;

    let coordinator = session::connect(&config, locale).await?;
    coordinator.refill_cache().await?;

    println!("Validating '{}'. Answer y/n, s to skip, q to quit.", coordinator.store().locale());
    let tally = validate(&coordinator).await?;

    println!();
    println!(
        "{} valid, {} invalid, {} skipped",
        tally.valid, tally.invalid, tally.skipped
    );
    if tally.failed > 0 {
        println!("{} votes could not be submitted", tally.failed);
    }
    Ok(())
}

async fn validate(coordinator: &SessionCoordinator) -> Result<Tally, CliError> {
    let mut tally = Tally::default();
    let mut pending: Option<FollowUp> = None;

    loop {
        let mut current = coordinator.store().local_clips().next;
        if current.is_none() {
            if let Some(follow_up) = pending.take() {
                follow_up.settle().await;
                current = coordinator.store().local_clips().next;
            }
        }
        if current.is_none() {
            // The last background refill came up empty; try once in the foreground.
            coordinator.refill_cache().await?;
            current = coordinator.store().local_clips().next;
        }
        let Some(clip) = current else {
            println!("No more clips to validate.");
            return Ok(tally);
        };

        println!();
        println!("{}", describe_clip(&clip));
        println!("  audio: {}", clip.audio_src);

        let Some(line) = prompt().await? else {
            return Ok(tally);
        };
        let Some(answer) = Answer::parse(&line) else {
            println!("Please answer y, n, s or q.");
            continue;
        };

        match answer {
            Answer::Quit => return Ok(tally),
            Answer::Skip => {
                pending = Some(coordinator.remove(&clip.id).await);
                tally.skipped += 1;
            }
            Answer::Valid | Answer::Invalid => {
                let is_valid = answer == Answer::Valid;
                match coordinator.vote(is_valid, Some(clip.id.as_str())).await {
                    Ok(receipt) => {
                        pending = Some(receipt.follow_up);
                        if is_valid {
                            tally.valid += 1;
                        } else {
                            tally.invalid += 1;
                        }
                        for message in toast_messages(&receipt.flags) {
                            println!("  * {}", message);
                        }
                    }
                    Err(e) => {
                        warn!(clip_id = %clip.id, error = %e, "Vote failed");
                        println!("  Vote not recorded: {}", e);
                        tally.failed += 1;
                    }
                }
            }
        }
    }
}

/// Reads one line from stdin off the async workers. `None` at end of input.
async fn prompt() -> Result<Option<String>, CliError> {
    print!("> ");
    io::stdout().flush().map_err(CliError::Input)?;

    let read = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).map(|n| (n, line))
    })
    .await
    .map_err(|e| CliError::Input(io::Error::new(io::ErrorKind::Interrupted, e.to_string())))?;

    match read.map_err(CliError::Input)? {
        (0, _) => Ok(None),
        (_, line) => Ok(Some(line)),
    }
}
