//! Per-locale clip queue state and its transitions.
//!
//! State only changes through [`ClipsAction`] values applied by [`reduce`],
//! a pure function from the previous table to the next. [`ClipStore`] owns
//! the live table for one session locale and serializes dispatches.
//!
//! ```
//! use clip_cache::store::{ClipStore, ClipsAction};
//!
//! let store = ClipStore::new("en", &["en".to_string(), "fr".to_string()]).unwrap();
//! store.dispatch(ClipsAction::Load);
//! assert!(store.local_clips().is_loading);
//! ```

mod action;
mod error;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::ClipsAction;
pub use error::StoreError;
pub use reducer::reduce;
pub use state::{ClipsState, LocaleClips};
pub use store::ClipStore;
