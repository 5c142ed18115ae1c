//! Submitting validation votes.

use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::error::CoordinatorError;
use super::follow_up::FollowUp;
use super::ClipCoordinator;
use crate::api::{ApiError, ClipApi};
use crate::clip::AchievementFlags;
use crate::store::ClipsAction;
use crate::user::{Account, UserStore};

/// A confirmed vote.
#[derive(Debug)]
pub struct VoteReceipt {
    pub clip_id: String,
    pub is_valid: bool,
    /// Flags reported by the backend for this vote.
    pub flags: AchievementFlags,
    /// User refresh and refill started after the vote.
    pub follow_up: FollowUp,
}

impl<A: ClipApi + 'static, U: UserStore + 'static> ClipCoordinator<A, U> {
    /// Votes on `clip_id`, or on the current clip when `None`.
    ///
    /// The clip leaves the queue before the backend confirms the vote and is
    /// not restored if the vote fails. After confirmation, anonymous users get
    /// a verification tallied, challenge participants get the returned flags
    /// applied, and a user refresh plus a refill are started in the
    /// background.
    pub async fn vote(
        &self,
        is_valid: bool,
        clip_id: Option<&str>,
    ) -> Result<VoteReceipt, CoordinatorError> {
        let clip_id = match clip_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => self
                .store
                .local_clips()
                .next_id()
                .map(str::to_string)
                .ok_or_else(|| CoordinatorError::NoCurrentClip {
                    locale: self.store.locale().to_string(),
                })?,
        };

        // Read before the await so the branches below see the voter as they were.
        let account = self.user.account();
        let challenge = account.as_ref().and_then(Account::active_challenge);

        self.store.dispatch(ClipsAction::RemoveClip {
            clip_id: clip_id.clone(),
        });

        let flags = self.api.save_vote(&clip_id, is_valid, challenge).await?;

        if account.is_none() {
            self.user.tally_verification();
        }
        if challenge.is_some() {
            self.store.dispatch(ClipsAction::Achievement(flags));
        }

        info!(
            locale = self.store.locale(),
            clip_id = %clip_id,
            is_valid,
            challenge = challenge.unwrap_or("-"),
            "Vote recorded"
        );

        let follow_up = FollowUp::new(Some(self.spawn_user_refresh()), self.spawn_refill());

        Ok(VoteReceipt {
            clip_id,
            is_valid,
            flags,
            follow_up,
        })
    }

    fn spawn_user_refresh(&self) -> JoinHandle<Result<(), ApiError>> {
        let user = std::sync::Arc::clone(&self.user);
        tokio::spawn(async move {
            let result = user.refresh().await;
            if let Err(e) = &result {
                warn!(error = %e, "User refresh after vote failed");
            }
            result
        })
    }
}
