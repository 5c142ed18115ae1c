//! Shared fixtures for coordinator tests.

use std::sync::Arc;

use super::{ClipCoordinator, CoordinatorConfig};
use crate::api::mock::{clips, MockClipApi};
use crate::store::{ClipStore, ClipsAction};
use crate::user::{Account, SessionUser};

pub(super) type TestCoordinator = ClipCoordinator<MockClipApi, SessionUser<MockClipApi>>;

pub(super) fn coordinator(api: MockClipApi) -> (TestCoordinator, Arc<MockClipApi>) {
    coordinator_for(api, None)
}

/// A coordinator whose user starts signed in as `account`.
pub(super) fn coordinator_for(
    api: MockClipApi,
    account: Option<Account>,
) -> (TestCoordinator, Arc<MockClipApi>) {
    let api = Arc::new(api);
    let store = Arc::new(ClipStore::new("en", &["en".to_string(), "fr".to_string()]).unwrap());
    let mut user = SessionUser::new(Arc::clone(&api));
    if let Some(account) = account {
        user = user.with_account(account);
    }
    let user = Arc::new(user);
    let coordinator =
        ClipCoordinator::new(store, Arc::clone(&api), user, CoordinatorConfig::default());
    (coordinator, api)
}

/// Leaves exactly `queued` clips behind a current clip.
pub(super) fn fill_queue(store: &ClipStore, queued: usize) {
    store.dispatch(ClipsAction::Refill {
        clips: Some(clips("pre", queued + 1)),
    });
    assert_eq!(store.queue_len(), queued);
}
