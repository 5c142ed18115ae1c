//! Transition variants for the clip queue.

use crate::clip::{AchievementFlags, Clip};

/// A state transition for one locale's clip queue.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipsAction {
    /// A fetch is in flight.
    Load,
    /// A fetch settled. `None` means the fetch failed and the queue is kept as is.
    Refill { clips: Option<Vec<Clip>> },
    /// Drop a clip from the queue and advance the current pointer.
    RemoveClip { clip_id: String },
    /// Replace the toast/achievement flags.
    Achievement(AchievementFlags),
}

impl ClipsAction {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Refill { .. } => "refill",
            Self::RemoveClip { .. } => "remove_clip",
            Self::Achievement(_) => "achievement",
        }
    }
}
