//! Background work started by a vote or a skip.

use tokio::task::JoinHandle;

use super::error::CoordinatorError;
use super::refill::RefillOutcome;
use crate::api::ApiError;

/// Handles to the tasks a vote or removal leaves running.
///
/// Dropping a `FollowUp` detaches the tasks; they still run to completion.
#[derive(Debug)]
pub struct FollowUp {
    refresh: Option<JoinHandle<Result<(), ApiError>>>,
    refill: JoinHandle<Result<RefillOutcome, CoordinatorError>>,
}

/// Results of a settled [`FollowUp`].
#[derive(Debug)]
pub struct Settled {
    /// `None` when no user refresh was started.
    pub refresh: Option<Result<(), CoordinatorError>>,
    pub refill: Result<RefillOutcome, CoordinatorError>,
}

impl FollowUp {
    pub(super) fn new(
        refresh: Option<JoinHandle<Result<(), ApiError>>>,
        refill: JoinHandle<Result<RefillOutcome, CoordinatorError>>,
    ) -> Self {
        Self { refresh, refill }
    }

    /// Waits for every follow-up task to finish.
    pub async fn settle(self) -> Settled {
        let refresh = match self.refresh {
            Some(handle) => Some(match handle.await {
                Ok(result) => result.map_err(CoordinatorError::from),
                Err(e) => Err(e.into()),
            }),
            None => None,
        };

        let refill = match self.refill.await {
            Ok(result) => result,
            Err(e) => Err(e.into()),
        };

        Settled { refresh, refill }
    }
}
