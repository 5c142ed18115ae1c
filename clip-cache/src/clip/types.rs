//! Clip and sentence types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::decode::{decode_sentence_text, UriError};

/// A sentence a contributor recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: String,
    pub text: String,
    /// Free-form tags attached by the sentence collector (domain, source, ...).
    #[serde(default)]
    pub taxonomy: BTreeMap<String, String>,
}

/// A recorded clip awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub id: String,
    /// Globally unique storage token for the recording.
    pub glob: String,
    pub sentence: Sentence,
    /// URL of the audio file.
    pub audio_src: String,
}

impl Clip {
    /// Returns the clip with its sentence text percent-decoded.
    ///
    /// Text that is not valid percent-encoding is kept as received.
    pub fn normalized(mut self) -> Self {
        match decode_sentence_text(&self.sentence.text) {
            Ok(text) => self.sentence.text = text,
            Err(UriError::MalformedEscape { offset }) => {
                tracing::trace!(clip_id = %self.id, offset, "Keeping raw sentence text");
            }
            Err(UriError::InvalidUtf8) => {
                tracing::trace!(clip_id = %self.id, "Keeping raw sentence text (not UTF-8)");
            }
        }
        self
    }
}

/// Toast and achievement flags reported by the vote API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementFlags {
    pub show_first_contribution_toast: bool,
    pub has_earned_session_toast: bool,
    pub show_first_streak_toast: bool,
    pub challenge_ended: bool,
}
