//! Backend API for fetching clips and submitting votes.
//!
//! [`ClipApi`] is the seam the coordinators depend on. [`HttpClipApi`] is the
//! production implementation, layered on the [`AsyncHttpClient`] transport
//! so tests can swap in a mock without a server.
//!
//! # Example
//!
//! ```ignore
//! use clip_cache::api::{ApiConfig, AsyncReqwestClient, ClipApi, HttpClipApi};
//!
//! let config = ApiConfig::default();
//! let http = AsyncReqwestClient::with_timeout(config.timeout_secs())?;
//! let api = HttpClipApi::new(http, &config, "en");
//! let clips = api.fetch_random_clips(10).await?;
//! ```

mod client;
mod config;
mod error;
mod http;
#[cfg(test)]
pub mod mock;

pub use client::{ClipApi, HttpClipApi};
pub use config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS};
pub use error::ApiError;
pub use http::{AsyncHttpClient, AsyncReqwestClient};

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, RecordedRequest};
