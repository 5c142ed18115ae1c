//! CLI command implementations.
//!
//! - [`config`] - Configuration file management (init, path)
//! - [`locales`] - Contributable locale listing
//! - [`queue`] - One-shot refill and queue dump
//! - [`session`] - Interactive validation loop

pub mod common;
pub mod config;
pub mod locales;
pub mod queue;
pub mod session;
