//! Pure transition function for the clip table.

use std::collections::HashSet;

use crate::clip::{AchievementFlags, Clip};

use super::action::ClipsAction;
use super::state::{ClipsState, LocaleClips};

/// Applies `action` to `locale`'s entry and returns the new table.
///
/// The input table is never modified, and no locale keys are ever added: an
/// action for a locale without an entry returns the table unchanged.
pub fn reduce(locale: &str, state: &ClipsState, action: &ClipsAction) -> ClipsState {
    let Some(current) = state.get(locale) else {
        return state.clone();
    };

    match action {
        ClipsAction::Load => {
            let mut entry = current.clone();
            entry.is_loading = true;
            state.with_locale(locale, entry)
        }

        ClipsAction::Refill { clips } => {
            let mut queue: Vec<Clip> = match clips {
                Some(batch) => current.clips.iter().chain(batch).cloned().collect(),
                None => current.clips.clone(),
            };

            // Head is taken before deduplication.
            let next = match current.next.clone() {
                Some(next) => Some(next),
                None if !queue.is_empty() => Some(queue.remove(0)),
                None => None,
            };

            let entry = LocaleClips {
                clips: dedupe_by_id(queue),
                next,
                is_loading: false,
                // challenge_ended is forced on regardless of the batch.
                flags: AchievementFlags {
                    challenge_ended: true,
                    ..AchievementFlags::default()
                },
            };
            state.with_locale(locale, entry)
        }

        ClipsAction::RemoveClip { clip_id } => {
            let entry = current.clone();
            let mut clips: Vec<Clip> = entry
                .clips
                .into_iter()
                .filter(|clip| clip.id != *clip_id)
                .collect();
            // The tail becomes the current clip and leaves the queue.
            let next = clips.pop();

            state.with_locale(
                locale,
                LocaleClips {
                    clips,
                    next,
                    is_loading: entry.is_loading,
                    flags: entry.flags,
                },
            )
        }

        ClipsAction::Achievement(flags) => {
            let mut entry = current.clone();
            entry.flags = *flags;
            state.with_locale(locale, entry)
        }
    }
}

/// Keeps the first clip seen for each id, preserving order.
fn dedupe_by_id(clips: Vec<Clip>) -> Vec<Clip> {
    let mut seen = HashSet::with_capacity(clips.len());
    clips
        .into_iter()
        .filter(|clip| seen.insert(clip.id.clone()))
        .collect()
}
