//! Live clip table for a session.

use parking_lot::Mutex;
use tracing::trace;

use super::action::ClipsAction;
use super::error::StoreError;
use super::reducer::reduce;
use super::state::{ClipsState, LocaleClips};

/// Owns the clip table and applies transitions for the session locale.
///
/// Each [`dispatch`](Self::dispatch) runs to completion under the lock, so
/// transitions never interleave. The lock is never held across an await.
#[derive(Debug)]
pub struct ClipStore {
    locale: String,
    state: Mutex<ClipsState>,
}

impl ClipStore {
    /// Creates a store with an empty entry for each contributable locale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownLocale`] if `locale` is not in `locales`.
    pub fn new(locale: &str, locales: &[String]) -> Result<Self, StoreError> {
        if !locales.iter().any(|l| l == locale) {
            return Err(StoreError::UnknownLocale {
                locale: locale.to_string(),
                known: locales.join(", "),
            });
        }

        Ok(Self {
            locale: locale.to_string(),
            state: Mutex::new(ClipsState::new(locales)),
        })
    }

    /// The locale this store dispatches for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Applies a transition to the session locale.
    pub fn dispatch(&self, action: ClipsAction) {
        let mut state = self.state.lock();
        let next = reduce(&self.locale, &state, &action);
        *state = next;

        if let Some(entry) = state.get(&self.locale) {
            trace!(
                locale = %self.locale,
                action = action.kind(),
                queued = entry.clips.len(),
                next = entry.next_id().unwrap_or("-"),
                loading = entry.is_loading,
                "Clip transition applied"
            );
        }
    }

    /// Selector for the session locale's queue and flags.
    pub fn local_clips(&self) -> LocaleClips {
        self.state
            .lock()
            .get(&self.locale)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of clips buffered behind the current one.
    pub fn queue_len(&self) -> usize {
        self.state
            .lock()
            .get(&self.locale)
            .map(|entry| entry.clips.len())
            .unwrap_or(0)
    }

    /// Copy of the whole table.
    pub fn snapshot(&self) -> ClipsState {
        self.state.lock().clone()
    }
}
