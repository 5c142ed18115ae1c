//! Error types for the coordinators.

use thiserror::Error;

use crate::api::ApiError;

/// Errors surfaced by [`ClipCoordinator`](super::ClipCoordinator) operations.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// The backend call failed and the operation has no local recovery.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A vote was requested without a clip id and nothing is being presented.
    #[error("No current clip to vote on for locale '{locale}'")]
    NoCurrentClip { locale: String },

    /// A spawned follow-up task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for CoordinatorError {
    fn from(e: tokio::task::JoinError) -> Self {
        CoordinatorError::Task(e.to_string())
    }
}
