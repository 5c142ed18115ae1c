//! Async orchestration of fetches and votes.
//!
//! [`ClipCoordinator`] ties a [`ClipStore`] to a [`ClipApi`] and a
//! [`UserStore`]. Every state change goes through [`ClipStore::dispatch`], in
//! the order each operation documents; the coordinator itself holds no state.
//!
//! # Architecture
//!
//! ```text
//! vote(is_valid, clip_id?)
//!     │
//!     ├── dispatch RemoveClip            (optimistic)
//!     ├── ClipApi::save_vote ──► AchievementFlags
//!     ├── UserStore::tally_verification  (anonymous only)
//!     ├── dispatch Achievement           (challenge enrollment only)
//!     ├── spawn UserStore::refresh
//!     └── refill ── low-water check, dispatch Load   (before vote returns)
//!                   spawn ── ClipApi::fetch_random_clips
//!                            dispatch Refill
//!                            ClipApi::prewarm_audio × N (concurrent)
//! ```
//!
//! Two refills can race past the low-water check and both fetch; the
//! deduplication in [`ClipsAction::Refill`](crate::store::ClipsAction::Refill)
//! absorbs the overlap.

mod config;
mod error;
mod follow_up;
mod prewarm;
mod refill;
mod remove;
#[cfg(test)]
mod test_support;
mod vote;

pub use config::{CoordinatorConfig, DEFAULT_LOW_WATER_MARK};
pub use error::CoordinatorError;
pub use follow_up::{FollowUp, Settled};
pub use refill::RefillOutcome;
pub use vote::VoteReceipt;

use std::sync::Arc;

use crate::api::ClipApi;
use crate::store::ClipStore;
use crate::user::UserStore;

/// Drives clip fetches and votes for one locale.
pub struct ClipCoordinator<A: ClipApi, U: UserStore> {
    store: Arc<ClipStore>,
    api: Arc<A>,
    user: Arc<U>,
    config: CoordinatorConfig,
}

impl<A: ClipApi, U: UserStore> ClipCoordinator<A, U> {
    pub fn new(store: Arc<ClipStore>, api: Arc<A>, user: Arc<U>, config: CoordinatorConfig) -> Self {
        Self {
            store,
            api,
            user,
            config,
        }
    }

    pub fn store(&self) -> &Arc<ClipStore> {
        &self.store
    }

    pub fn user(&self) -> &Arc<U> {
        &self.user
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }
}

impl<A: ClipApi, U: UserStore> Clone for ClipCoordinator<A, U> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            api: Arc::clone(&self.api),
            user: Arc::clone(&self.user),
            config: self.config,
        }
    }
}
