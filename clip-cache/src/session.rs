//! Wiring a coordinator from configuration.
//!
//! [`connect`] is what the CLI uses: it resolves the locale, builds the
//! reqwest-backed API and user store, and loads the user's account.
//! [`build`] does the same wiring over any [`AsyncHttpClient`].

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{ApiError, AsyncHttpClient, AsyncReqwestClient, HttpClipApi};
use crate::config::ConfigFile;
use crate::coordinator::ClipCoordinator;
use crate::locales::{ContributableLocales, LocaleError};
use crate::store::{ClipStore, StoreError};
use crate::user::{SessionUser, UserStore};

/// Coordinator over the HTTP API for transport `C`.
pub type Coordinator<C> = ClipCoordinator<HttpClipApi<C>, SessionUser<HttpClipApi<C>>>;

/// Coordinator used against a real backend.
pub type SessionCoordinator = Coordinator<AsyncReqwestClient>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] ApiError),
}

/// Build a coordinator for `locale` over `http`.
///
/// The user starts anonymous; call [`UserStore::refresh`] to load the account.
pub fn build<C: AsyncHttpClient + 'static>(
    http: C,
    config: &ConfigFile,
    locales: &ContributableLocales,
    locale: &str,
) -> Result<Coordinator<C>, SessionError> {
    let store = Arc::new(ClipStore::new(locale, locales.codes())?);
    let api = Arc::new(HttpClipApi::new(http, &config.api_config(), locale));
    let user = Arc::new(SessionUser::new(Arc::clone(&api)));

    Ok(ClipCoordinator::new(
        store,
        api,
        user,
        config.coordinator_config(),
    ))
}

/// Open a validation session against the configured backend.
///
/// `locale` overrides `[session] locale`. A failed account lookup leaves the
/// user anonymous; the session still opens.
pub async fn connect(
    config: &ConfigFile,
    locale: Option<&str>,
) -> Result<SessionCoordinator, SessionError> {
    let locales = ContributableLocales::load(config.locales.file.as_deref())?;
    let locale = locale.unwrap_or(&config.session.locale);
    let http = AsyncReqwestClient::with_timeout(config.api.timeout).map_err(SessionError::Client)?;

    let coordinator = build(http, config, &locales, locale)?;

    match coordinator.user().refresh().await {
        Ok(()) => info!(
            locale,
            base_url = %config.api.base_url,
            signed_in = coordinator.user().account().is_some(),
            "Session opened"
        ),
        Err(e) => warn!(locale, error = %e, "Account lookup failed, continuing anonymously"),
    }

    Ok(coordinator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAsyncHttpClient;

    #[test]
    fn test_build_uses_configured_low_water_mark() {
        let mut config = ConfigFile::default();
        config.cache.low_water_mark = 2;
        let locales = ContributableLocales::new(&["en", "fr"]).unwrap();

        let coordinator = build(MockAsyncHttpClient::new(), &config, &locales, "fr").unwrap();

        assert_eq!(coordinator.config().batch_size(), 2);
        assert_eq!(coordinator.store().locale(), "fr");
        assert_eq!(coordinator.store().snapshot().len(), 2);
    }

    #[test]
    fn test_build_rejects_unlisted_locale() {
        let locales = ContributableLocales::new(&["en"]).unwrap();

        let err = build(
            MockAsyncHttpClient::new(),
            &ConfigFile::default(),
            &locales,
            "xx",
        )
        .err()
        .unwrap();

        assert!(matches!(
            err,
            SessionError::Store(StoreError::UnknownLocale { .. })
        ));
    }

    #[tokio::test]
    async fn test_connect_reports_locale_file_errors() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = ConfigFile::default();
        config.locales.file = Some(temp_dir.path().join("missing.json"));

        let err = connect(&config, None).await.err().unwrap();
        assert!(matches!(err, SessionError::Locale(LocaleError::Read { .. })));
    }
}
