//! Clip API trait and its HTTP implementation.

use std::future::Future;

use reqwest::Url;
use serde::Serialize;
use tracing::debug;

use super::config::ApiConfig;
use super::error::ApiError;
use super::http::AsyncHttpClient;
use crate::clip::{AchievementFlags, Clip};
use crate::user::Account;

/// Backend operations used by the clip coordinators.
pub trait ClipApi: Send + Sync {
    /// Fetch up to `count` random clips awaiting validation.
    fn fetch_random_clips(
        &self,
        count: usize,
    ) -> impl Future<Output = Result<Vec<Clip>, ApiError>> + Send;

    /// Submit a validation verdict for a clip.
    ///
    /// `challenge` is the voter's active challenge token, if any.
    fn save_vote(
        &self,
        clip_id: &str,
        is_valid: bool,
        challenge: Option<&str>,
    ) -> impl Future<Output = Result<AchievementFlags, ApiError>> + Send;

    /// Fetch the account tied to this client, `None` when anonymous.
    fn fetch_account(&self) -> impl Future<Output = Result<Option<Account>, ApiError>> + Send;

    /// Request an audio file so later playback is served from cache.
    fn prewarm_audio(&self, audio_src: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoteBody<'a> {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge: Option<&'a str>,
}

/// [`ClipApi`] over HTTP for one locale.
pub struct HttpClipApi<C: AsyncHttpClient> {
    http: C,
    base_url: String,
    locale: String,
    client_id: Option<String>,
    authorization: Option<String>,
}

impl<C: AsyncHttpClient> HttpClipApi<C> {
    pub fn new(http: C, config: &ApiConfig, locale: &str) -> Self {
        Self {
            http,
            base_url: config.base_url().to_string(),
            locale: locale.to_string(),
            client_id: config.client_id().map(str::to_string),
            authorization: config.auth_token().map(|token| format!("Bearer {}", token)),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    fn locale_url(&self, path: &str) -> String {
        self.api_url(&format!("{}/{}", self.locale, path))
    }

    /// The votes route for one clip. The id is pushed as a single path
    /// segment so `/`, `?` and `#` in it are percent-encoded.
    fn vote_url(&self, clip_id: &str) -> Result<String, ApiError> {
        let base = self.locale_url("clips");
        let mut url = Url::parse(&base)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(base.clone()))?
            .push(clip_id)
            .push("votes");
        Ok(url.into())
    }

    /// Audio sources may be served relative to the backend origin.
    fn audio_url(&self, audio_src: &str) -> String {
        if audio_src.starts_with('/') {
            format!("{}{}", self.base_url, audio_src)
        } else {
            audio_src.to_string()
        }
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(client_id) = &self.client_id {
            headers.push(("client_id", client_id.as_str()));
        }
        if let Some(authorization) = &self.authorization {
            headers.push(("Authorization", authorization.as_str()));
        }
        headers
    }
}

impl<C: AsyncHttpClient> ClipApi for HttpClipApi<C> {
    async fn fetch_random_clips(&self, count: usize) -> Result<Vec<Clip>, ApiError> {
        let url = self.locale_url(&format!("clips?count={}", count));
        let body = self.http.get(&url, &self.headers()).await?;
        let clips: Vec<Clip> = serde_json::from_slice(&body)?;

        debug!(
            locale = %self.locale,
            requested = count,
            received = clips.len(),
            "Fetched clips"
        );
        Ok(clips)
    }

    async fn save_vote(
        &self,
        clip_id: &str,
        is_valid: bool,
        challenge: Option<&str>,
    ) -> Result<AchievementFlags, ApiError> {
        if clip_id.is_empty() {
            return Err(ApiError::InvalidResponse(
                "Cannot vote on a clip without an id".to_string(),
            ));
        }

        let url = self.vote_url(clip_id)?;
        let body = serde_json::to_string(&VoteBody {
            is_valid,
            challenge,
        })?;
        let response = self.http.post_json(&url, &self.headers(), &body).await?;

        // Older backends answer with an empty body.
        if response.iter().all(u8::is_ascii_whitespace) {
            return Ok(AchievementFlags::default());
        }
        Ok(serde_json::from_slice(&response)?)
    }

    async fn fetch_account(&self) -> Result<Option<Account>, ApiError> {
        let url = self.api_url("user_client");
        let body = self.http.get(&url, &self.headers()).await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn prewarm_audio(&self, audio_src: &str) -> Result<(), ApiError> {
        let url = self.audio_url(audio_src);
        self.http.get(&url, &[]).await.map(|_| ())
    }
}
