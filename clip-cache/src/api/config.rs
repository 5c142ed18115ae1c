//! Backend connection settings.

/// Default backend origin.
pub const DEFAULT_API_BASE_URL: &str = "https://commonvoice.mozilla.org";

/// Default HTTP timeout in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpClipApi`](super::HttpClipApi).
///
/// # Example
///
/// ```
/// use clip_cache::api::ApiConfig;
///
/// let config = ApiConfig::new()
///     .with_base_url("http://localhost:9000/")
///     .with_client_id("abc");
/// assert_eq!(config.base_url(), "http://localhost:9000");
/// assert_eq!(config.client_id(), Some("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout_secs: u64,
    client_id: Option<String>,
    auth_token: Option<String>,
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend origin. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Identify this client to the backend (sent as the `client_id` header).
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Bearer token for authenticated accounts.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            client_id: None,
            auth_token: None,
        }
    }
}
