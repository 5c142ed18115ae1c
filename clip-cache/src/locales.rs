//! Locales open for clip validation.
//!
//! The list is read once at startup from a JSON array such as
//! `["en", "fr", "de"]`, or taken from a built-in default.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Locales used when no locale file is configured.
pub const BUILTIN_LOCALES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "pl", "ca", "eu", "cy", "rw", "ru", "tr", "uk", "ja",
];

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Failed to read locale file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Locale file {path} is not a JSON array of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Locale list is empty")]
    Empty,
}

/// Ordered, duplicate-free list of locale codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributableLocales {
    codes: Vec<String>,
}

impl ContributableLocales {
    /// Build from codes in order. Blank codes are dropped and repeats keep
    /// their first position.
    pub fn new<S: AsRef<str>>(codes: &[S]) -> Result<Self, LocaleError> {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref().trim();
            if code.is_empty() {
                continue;
            }
            if seen.insert(code.to_string()) {
                unique.push(code.to_string());
            } else {
                warn!(locale = code, "Duplicate locale code ignored");
            }
        }

        if unique.is_empty() {
            return Err(LocaleError::Empty);
        }
        Ok(Self { codes: unique })
    }

    pub fn builtin() -> Self {
        Self {
            codes: BUILTIN_LOCALES.iter().map(|code| code.to_string()).collect(),
        }
    }

    /// Read a JSON array of locale codes.
    pub fn load_from(path: &Path) -> Result<Self, LocaleError> {
        let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let codes: Vec<String> =
            serde_json::from_str(&content).map_err(|source| LocaleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let locales = Self::new(&codes)?;
        debug!(path = %path.display(), count = locales.len(), "Loaded locale list");
        Ok(locales)
    }

    /// The configured file when there is one, otherwise the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self, LocaleError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.codes.iter().any(|code| code == locale)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
