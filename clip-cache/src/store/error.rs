//! Error types for the clip store.

use thiserror::Error;

/// Errors raised while setting up a clip store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The session locale is not one of the contributable locales.
    #[error("Locale '{locale}' is not contributable (known: {known})")]
    UnknownLocale { locale: String, known: String },
}
