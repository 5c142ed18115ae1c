//! User store seam and its in-memory implementation.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::account::Account;
use crate::api::{ApiError, ClipApi};

/// User-side operations triggered by voting.
pub trait UserStore: Send + Sync {
    /// The registered account, `None` for anonymous contributors.
    fn account(&self) -> Option<Account>;

    /// Count one verification made without an account.
    fn tally_verification(&self);

    /// Reload the account from the backend.
    fn refresh(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Contributor state kept for one session.
pub struct SessionUser<A: ClipApi> {
    api: Arc<A>,
    account: RwLock<Option<Account>>,
    verifications: AtomicU32,
}

impl<A: ClipApi> SessionUser<A> {
    /// An anonymous user until the first [`refresh`](UserStore::refresh).
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            account: RwLock::new(None),
            verifications: AtomicU32::new(0),
        }
    }

    pub fn with_account(self, account: Account) -> Self {
        *self.account.write() = Some(account);
        self
    }

    /// Verifications tallied while anonymous.
    pub fn verification_count(&self) -> u32 {
        self.verifications.load(Ordering::Relaxed)
    }
}

impl<A: ClipApi> UserStore for SessionUser<A> {
    fn account(&self) -> Option<Account> {
        self.account.read().clone()
    }

    fn tally_verification(&self) {
        let total = self.verifications.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(total, "Anonymous verification tallied");
    }

    async fn refresh(&self) -> Result<(), ApiError> {
        let account = self.api.fetch_account().await?;
        debug!(
            signed_in = account.is_some(),
            challenge = account
                .as_ref()
                .and_then(Account::active_challenge)
                .unwrap_or("-"),
            "User refreshed"
        );
        *self.account.write() = account;
        Ok(())
    }
}
