//! In-memory [`ClipApi`] for coordinator tests.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use super::client::ClipApi;
use super::error::ApiError;
use crate::clip::{AchievementFlags, Clip, Sentence};
use crate::user::Account;

/// A call observed by [`MockClipApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchClips(usize),
    SaveVote {
        clip_id: String,
        is_valid: bool,
        challenge: Option<String>,
    },
    FetchAccount,
    PrewarmAudio(String),
}

/// Pauses `save_vote` until the test releases it.
#[derive(Debug, Default)]
pub struct VoteGate {
    pub entered: Notify,
    pub release: Notify,
}

/// Scripted clip API. Each fetch answers with the next queued batch, or an
/// empty batch once the script runs out.
#[derive(Default)]
pub struct MockClipApi {
    batches: Mutex<VecDeque<Result<Vec<Clip>, ApiError>>>,
    vote_result: Mutex<Option<Result<AchievementFlags, ApiError>>>,
    account: Mutex<Option<Account>>,
    failing_audio: HashSet<String>,
    vote_gate: Option<Arc<VoteGate>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockClipApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch(self, clips: Vec<Clip>) -> Self {
        self.batches.lock().push_back(Ok(clips));
        self
    }

    pub fn with_fetch_error(self, error: ApiError) -> Self {
        self.batches.lock().push_back(Err(error));
        self
    }

    pub fn with_vote_result(self, result: Result<AchievementFlags, ApiError>) -> Self {
        *self.vote_result.lock() = Some(result);
        self
    }

    pub fn with_account(self, account: Account) -> Self {
        *self.account.lock() = Some(account);
        self
    }

    pub fn with_failing_audio(mut self, audio_src: &str) -> Self {
        self.failing_audio.insert(audio_src.to_string());
        self
    }

    pub fn with_vote_gate(mut self, gate: Arc<VoteGate>) -> Self {
        self.vote_gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, ApiCall::FetchClips(_)))
            .count()
    }
}

impl ClipApi for MockClipApi {
    async fn fetch_random_clips(&self, count: usize) -> Result<Vec<Clip>, ApiError> {
        self.calls.lock().push(ApiCall::FetchClips(count));
        let next = self.batches.lock().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn save_vote(
        &self,
        clip_id: &str,
        is_valid: bool,
        challenge: Option<&str>,
    ) -> Result<AchievementFlags, ApiError> {
        self.calls.lock().push(ApiCall::SaveVote {
            clip_id: clip_id.to_string(),
            is_valid,
            challenge: challenge.map(str::to_string),
        });

        if let Some(gate) = &self.vote_gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        self.vote_result
            .lock()
            .clone()
            .unwrap_or(Ok(AchievementFlags::default()))
    }

    async fn fetch_account(&self) -> Result<Option<Account>, ApiError> {
        self.calls.lock().push(ApiCall::FetchAccount);
        Ok(self.account.lock().clone())
    }

    async fn prewarm_audio(&self, audio_src: &str) -> Result<(), ApiError> {
        self.calls
            .lock()
            .push(ApiCall::PrewarmAudio(audio_src.to_string()));
        if self.failing_audio.contains(audio_src) {
            return Err(ApiError::Transport(format!("{} unreachable", audio_src)));
        }
        Ok(())
    }
}

/// A clip whose audio lives at `https://cdn.test/<id>.mp3`.
pub fn clip(id: &str) -> Clip {
    Clip {
        id: id.to_string(),
        glob: format!("glob/{}", id),
        sentence: Sentence {
            id: format!("s-{}", id),
            text: format!("sentence%20{}", id),
            taxonomy: Default::default(),
        },
        audio_src: format!("https://cdn.test/{}.mp3", id),
    }
}

/// `count` clips with ids `<prefix>0..<prefix>{count-1}`.
pub fn clips(prefix: &str, count: usize) -> Vec<Clip> {
    (0..count).map(|i| clip(&format!("{}{}", prefix, i))).collect()
}
