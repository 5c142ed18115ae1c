//! Clip records served by the validation API.
//!
//! A [`Clip`] is one recording awaiting validation, paired with the
//! [`Sentence`] the contributor read aloud. Sentence text arrives
//! percent-encoded from some backends; [`decode_sentence_text`] undoes that
//! and reports malformed input as a [`UriError`].

mod decode;
mod types;

pub use decode::{decode_sentence_text, UriError};
pub use types::{AchievementFlags, Clip, Sentence};
