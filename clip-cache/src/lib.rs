//! clip-cache - Prefetched clip queues for crowdsourced voice validation
//!
//! This library keeps, per locale, a small queue of recordings waiting for
//! a validation vote, together with the toast/achievement flags the backend
//! reports after each vote.
//!
//! # High-Level API
//!
//! For most use cases, [`session::connect`] wires everything from the user's
//! configuration:
//!
//! ```ignore
//! use clip_cache::config::ConfigFile;
//! use clip_cache::session;
//!
//! let config = ConfigFile::load()?;
//! let coordinator = session::connect(&config, Some("fr")).await?;
//!
//! coordinator.refill_cache().await?;
//! if let Some(clip) = coordinator.store().local_clips().next {
//!     println!("{}", clip.sentence.text);
//!     let receipt = coordinator.vote(true, None).await?;
//! }
//! ```
//!
//! State changes only through [`store::ClipStore::dispatch`], which applies
//! the pure [`store::reduce`] transition under a lock.

pub mod api;
pub mod clip;
pub mod config;
pub mod coordinator;
pub mod locales;
pub mod logging;
pub mod session;
pub mod store;
pub mod user;

/// Version of the clip-cache library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
