//! Discarding clips without a vote.

use tracing::debug;

use super::follow_up::FollowUp;
use super::ClipCoordinator;
use crate::api::ClipApi;
use crate::store::ClipsAction;
use crate::user::UserStore;

impl<A: ClipApi + 'static, U: UserStore + 'static> ClipCoordinator<A, U> {
    /// Drops `clip_id` from the queue (e.g. on skip) and starts a refill.
    pub async fn remove(&self, clip_id: &str) -> FollowUp {
        self.store.dispatch(ClipsAction::RemoveClip {
            clip_id: clip_id.to_string(),
        });
        debug!(locale = self.store.locale(), clip_id, "Clip skipped");

        FollowUp::new(None, self.spawn_refill())
    }
}
