//! Keeping the clip queue topped up.

use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use super::error::CoordinatorError;
use super::prewarm::prewarm_audio;
use super::ClipCoordinator;
use crate::api::ClipApi;
use crate::clip::Clip;
use crate::store::ClipsAction;
use crate::user::UserStore;

/// What a refill did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefillOutcome {
    /// The queue was above the low-water mark; nothing was dispatched.
    Skipped { queued: usize },
    /// A batch was fetched and queued.
    Refilled {
        fetched: usize,
        prewarm_failures: usize,
    },
    /// The fetch failed at the request level; loading was cleared and the
    /// queue kept as is.
    SoftFailed,
}

impl<A: ClipApi, U: UserStore> ClipCoordinator<A, U> {
    /// Fetches a new batch of clips if the queue is running low.
    ///
    /// Dispatches `Load`, then `Refill` with the fetched batch, then waits
    /// for every clip's audio to be requested. A request-level fetch failure
    /// dispatches an empty `Refill` and returns [`RefillOutcome::SoftFailed`];
    /// any other failure is returned as an error and leaves `is_loading` set.
    pub async fn refill_cache(&self) -> Result<RefillOutcome, CoordinatorError> {
        match self.begin_refill() {
            Some(skipped) => Ok(skipped),
            None => self.complete_refill().await,
        }
    }

    /// Checks the low-water mark and dispatches `Load` if a fetch is due.
    ///
    /// Returns the outcome when no fetch is needed.
    fn begin_refill(&self) -> Option<RefillOutcome> {
        let queued = self.store.queue_len();
        if queued > self.config.low_water_mark() {
            trace!(
                locale = self.store.locale(),
                queued,
                "Clip queue above low-water mark, skipping refill"
            );
            return Some(RefillOutcome::Skipped { queued });
        }

        self.store.dispatch(ClipsAction::Load);
        None
    }

    /// Fetch, queue and prewarm. `Load` must already be dispatched.
    async fn complete_refill(&self) -> Result<RefillOutcome, CoordinatorError> {
        let locale = self.store.locale();
        let batch = match self.api.fetch_random_clips(self.config.batch_size()).await {
            Ok(batch) => batch,
            Err(e) if e.is_request_failure() => {
                warn!(locale, error = %e, "Clip fetch failed, keeping current queue");
                self.store.dispatch(ClipsAction::Refill { clips: None });
                return Ok(RefillOutcome::SoftFailed);
            }
            Err(e) => return Err(e.into()),
        };

        let batch: Vec<Clip> = batch.into_iter().map(Clip::normalized).collect();
        let audio_srcs: Vec<String> = batch.iter().map(|clip| clip.audio_src.clone()).collect();
        let fetched = batch.len();

        self.store.dispatch(ClipsAction::Refill { clips: Some(batch) });
        debug!(locale, fetched, queued = self.store.queue_len(), "Clip queue refilled");

        let prewarm_failures = prewarm_audio(self.api.as_ref(), &audio_srcs).await;
        if prewarm_failures > 0 {
            info!(
                locale,
                prewarm_failures,
                total = audio_srcs.len(),
                "Some clip audio could not be prewarmed"
            );
        }

        Ok(RefillOutcome::Refilled {
            fetched,
            prewarm_failures,
        })
    }
}

impl<A: ClipApi + 'static, U: UserStore + 'static> ClipCoordinator<A, U> {
    /// Starts a refill without waiting for the fetch.
    ///
    /// The low-water check and `Load` happen before this returns; only the
    /// fetch and what follows run on the spawned task. Errors are logged.
    pub(super) fn spawn_refill(&self) -> JoinHandle<Result<RefillOutcome, CoordinatorError>> {
        let skipped = self.begin_refill();
        let this = self.clone();
        tokio::spawn(async move {
            if let Some(skipped) = skipped {
                return Ok(skipped);
            }
            let result = this.complete_refill().await;
            if let Err(e) = &result {
                warn!(locale = this.store.locale(), error = %e, "Background refill failed");
            }
            result
        })
    }
}
