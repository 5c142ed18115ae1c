//! Integration tests for a full validation session.
//!
//! These tests drive the public API end to end over a scripted backend:
//! - Account lookup and challenge-aware voting
//! - Refill, vote and skip with their background follow-ups
//! - Soft failure of a refill when the backend is unreachable
//!
//! Run with: `cargo test --test session_flow`

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;

use clip_cache::api::{ApiError, AsyncHttpClient};
use clip_cache::config::ConfigFile;
use clip_cache::coordinator::{CoordinatorError, RefillOutcome};
use clip_cache::locales::ContributableLocales;
use clip_cache::session;
use clip_cache::user::UserStore;

const BASE: &str = "https://voice.test";

// ============================================================================
// Mock Backend
// ============================================================================

/// Scripted backend speaking the clip API over the HTTP transport seam.
#[derive(Default)]
struct FakeBackend {
    clip_batches: Mutex<VecDeque<Result<String, ApiError>>>,
    routes: HashMap<String, Result<String, ApiError>>,
    posts: Mutex<Vec<(String, String)>>,
    gets: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn new() -> Self {
        Self::default()
    }

    /// Queue the body of the next `clips?count=` answer.
    fn with_clips(self, body: &str) -> Self {
        self.clip_batches
            .lock()
            .push_back(Ok(body.to_string()));
        self
    }

    fn with_clips_error(self, error: ApiError) -> Self {
        self.clip_batches.lock().push_back(Err(error));
        self
    }

    fn with_route(mut self, url: &str, body: &str) -> Self {
        self.routes.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    fn with_route_error(mut self, url: &str, error: ApiError) -> Self {
        self.routes.insert(url.to_string(), Err(error));
        self
    }

    fn answer(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        if url.contains("/clips?count=") {
            return match self.clip_batches.lock().pop_front() {
                Some(batch) => batch.map(String::into_bytes),
                None => Ok(b"[]".to_vec()),
            };
        }
        match self.routes.get(url) {
            Some(result) => result.clone().map(String::into_bytes),
            None => Err(ApiError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

impl AsyncHttpClient for FakeBackend {
    async fn get(&self, url: &str, _headers: &[(&str, &str)]) -> Result<Vec<u8>, ApiError> {
        self.gets.lock().push(url.to_string());
        self.answer(url)
    }

    async fn post_json(
        &self,
        url: &str,
        _headers: &[(&str, &str)],
        json_body: &str,
    ) -> Result<Vec<u8>, ApiError> {
        self.posts
            .lock()
            .push((url.to_string(), json_body.to_string()));
        self.answer(url)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn clip_json(id: &str, text: &str) -> String {
    format!(
        r#"{{"id":"{id}","glob":"g/{id}","sentence":{{"id":"s{id}","text":"{text}"}},"audioSrc":"https://cdn.voice.test/{id}.mp3"}}"#
    )
}

fn batch(clips: &[(&str, &str)]) -> String {
    let items: Vec<String> = clips.iter().map(|(id, text)| clip_json(id, text)).collect();
    format!("[{}]", items.join(","))
}

fn audio(backend: FakeBackend, ids: &[&str]) -> FakeBackend {
    ids.iter().fold(backend, |backend, id| {
        backend.with_route(&format!("https://cdn.voice.test/{}.mp3", id), "ID3")
    })
}

fn config() -> ConfigFile {
    let mut config = ConfigFile::default();
    config.api.base_url = BASE.to_string();
    config.cache.low_water_mark = 3;
    config
}

fn locales() -> ContributableLocales {
    ContributableLocales::new(&["en", "fr"]).unwrap()
}

fn queue_ids(coordinator: &session::Coordinator<FakeBackend>) -> Vec<String> {
    coordinator
        .store()
        .local_clips()
        .clips
        .iter()
        .map(|clip| clip.id.clone())
        .collect()
}

const ACCOUNT_JSON: &str =
    r#"{"client_id":"c1","username":"ada","enrollment":{"challenge":"pilot","team":"ibm"}}"#;

const EARNED_JSON: &str = r#"{"showFirstContributionToast":true,"hasEarnedSessionToast":false,"showFirstStreakToast":false,"challengeEnded":false}"#;

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_refill_vote_and_follow_up() {
    let backend = FakeBackend::new()
        .with_clips(&batch(&[("1", "Hello%20world"), ("2", "Zwei"), ("3", "100% sure")]))
        .with_clips(&batch(&[("3", "100% sure"), ("4", "Vier"), ("5", "F%C3%BCnf")]))
        .with_route(&format!("{}/api/v1/user_client", BASE), ACCOUNT_JSON)
        .with_route(&format!("{}/api/v1/en/clips/1/votes", BASE), EARNED_JSON)
        .with_route_error(
            "https://cdn.voice.test/2.mp3",
            ApiError::Transport("connection reset".to_string()),
        );
    let backend = audio(backend, &["1", "3", "4", "5"]);
    let coordinator = session::build(backend, &config(), &locales(), "en").unwrap();

    coordinator.user().refresh().await.unwrap();
    assert_eq!(
        coordinator
            .user()
            .account()
            .as_ref()
            .and_then(|account| account.active_challenge()),
        Some("pilot")
    );

    // First refill: head becomes current, bad escapes stay raw.
    let outcome = coordinator.refill_cache().await.unwrap();
    assert_eq!(
        outcome,
        RefillOutcome::Refilled {
            fetched: 3,
            prewarm_failures: 1
        }
    );
    let state = coordinator.store().local_clips();
    let current = state.next.clone().unwrap();
    assert_eq!(current.id, "1");
    assert_eq!(current.sentence.text, "Hello world");
    assert_eq!(queue_ids(&coordinator), ["2", "3"]);
    assert_eq!(state.clips[1].sentence.text, "100% sure");
    assert!(state.flags.challenge_ended);

    // Vote on the current clip: the queue tail takes its place.
    let receipt = coordinator.vote(true, None).await.unwrap();
    assert_eq!(receipt.clip_id, "1");
    assert!(receipt.flags.show_first_contribution_toast);
    let state = coordinator.store().local_clips();
    assert_eq!(state.next_id(), Some("3"));
    assert!(state.flags.show_first_contribution_toast);
    assert!(!state.flags.challenge_ended);

    let settled = receipt.follow_up.settle().await;
    assert!(matches!(settled.refresh, Some(Ok(()))));
    assert_eq!(
        settled.refill.unwrap(),
        RefillOutcome::Refilled {
            fetched: 3,
            prewarm_failures: 0
        }
    );

    // The current clip is not part of the queue, so its id may come back.
    let state = coordinator.store().local_clips();
    assert_eq!(state.next_id(), Some("3"));
    assert_eq!(queue_ids(&coordinator), ["2", "3", "4", "5"]);
    assert_eq!(state.clips[3].sentence.text, "Fünf");
    assert!(state.flags.challenge_ended);
    // Anonymous tally is only for users without an account.
    assert_eq!(coordinator.user().verification_count(), 0);
}

#[tokio::test]
async fn test_anonymous_session_skip_and_soft_failure() {
    let backend = FakeBackend::new()
        .with_clips(&batch(&[("a", "Eins"), ("b", "Zwei"), ("c", "Drei")]))
        .with_clips_error(ApiError::Transport("timed out".to_string()))
        .with_route(&format!("{}/api/v1/user_client", BASE), "null")
        .with_route(&format!("{}/api/v1/en/clips/c/votes", BASE), "");
    let backend = audio(backend, &["a", "b", "c"]);
    let coordinator = session::build(backend, &config(), &locales(), "en").unwrap();

    coordinator.user().refresh().await.unwrap();
    assert!(coordinator.user().account().is_none());
    coordinator.refill_cache().await.unwrap();
    assert_eq!(coordinator.store().local_clips().next_id(), Some("a"));

    // Skip: queue [b, c] loses its tail to the current slot.
    let settled = coordinator.remove("a").await.settle().await;
    assert!(settled.refresh.is_none());
    assert_eq!(settled.refill.unwrap(), RefillOutcome::SoftFailed);
    let state = coordinator.store().local_clips();
    assert_eq!(state.next_id(), Some("c"));
    assert_eq!(queue_ids(&coordinator), ["b"]);
    assert!(!state.is_loading);

    // Anonymous vote with an empty response body.
    let receipt = coordinator.vote(false, None).await.unwrap();
    assert_eq!(receipt.clip_id, "c");
    assert_eq!(coordinator.user().verification_count(), 1);
    let settled = receipt.follow_up.settle().await;
    assert!(matches!(
        settled.refill,
        Ok(RefillOutcome::Refilled { fetched: 0, .. })
    ));
}

#[tokio::test]
async fn test_failed_vote_is_not_rolled_back() {
    let backend = FakeBackend::new()
        .with_clips(&batch(&[("a", "Eins"), ("b", "Zwei")]))
        .with_route_error(
            &format!("{}/api/v1/en/clips/a/votes", BASE),
            ApiError::Status {
                status: 503,
                url: format!("{}/api/v1/en/clips/a/votes", BASE),
            },
        );
    let backend = audio(backend, &["a", "b"]);
    let coordinator = session::build(backend, &config(), &locales(), "en").unwrap();
    coordinator.refill_cache().await.unwrap();

    let err = coordinator.vote(true, None).await.unwrap_err();

    assert!(matches!(
        err,
        CoordinatorError::Api(ApiError::Status { status: 503, .. })
    ));
    let state = coordinator.store().local_clips();
    assert_eq!(state.next_id(), Some("b"));
    assert!(state.clips.is_empty());
}

#[tokio::test]
async fn test_other_locales_untouched() {
    let backend = audio(
        FakeBackend::new().with_clips(&batch(&[("a", "Un"), ("b", "Deux")])),
        &["a", "b"],
    );
    let coordinator = session::build(backend, &config(), &locales(), "fr").unwrap();

    coordinator.refill_cache().await.unwrap();

    let snapshot = coordinator.store().snapshot();
    assert_eq!(snapshot.get("fr").unwrap().next_id(), Some("a"));
    let en = snapshot.get("en").unwrap();
    assert!(en.clips.is_empty());
    assert!(en.next.is_none());
    assert!(!en.flags.challenge_ended);
}
