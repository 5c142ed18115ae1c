//! Account records returned by the backend.

use serde::{Deserialize, Serialize};

/// Challenge/team enrollment attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enrollment {
    /// Active challenge token, if the account is enrolled in one.
    pub challenge: Option<String>,
    pub team: Option<String>,
    pub invite: Option<String>,
}

/// A registered contributor account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub client_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub enrollment: Option<Enrollment>,
}

impl Account {
    /// The challenge this account is currently competing in.
    pub fn active_challenge(&self) -> Option<&str> {
        self.enrollment
            .as_ref()
            .and_then(|enrollment| enrollment.challenge.as_deref())
    }
}
