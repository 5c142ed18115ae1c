//! Clip queue state types.

use std::collections::BTreeMap;

use crate::clip::{AchievementFlags, Clip};

/// Queue and UI flags for a single locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleClips {
    /// Buffered clips, oldest first.
    pub clips: Vec<Clip>,
    /// The clip currently presented for validation.
    pub next: Option<Clip>,
    pub is_loading: bool,
    pub flags: AchievementFlags,
}

impl LocaleClips {
    /// Id of the current clip, if any.
    pub fn next_id(&self) -> Option<&str> {
        self.next.as_ref().map(|clip| clip.id.as_str())
    }
}

/// Clip state for every contributable locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipsState {
    locales: BTreeMap<String, LocaleClips>,
}

impl ClipsState {
    /// Creates an empty entry for each locale.
    pub fn new<S: AsRef<str>>(locales: &[S]) -> Self {
        let locales = locales
            .iter()
            .map(|locale| (locale.as_ref().to_string(), LocaleClips::default()))
            .collect();
        Self { locales }
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleClips> {
        self.locales.get(locale)
    }

    /// Locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Returns a copy of this table with `locale` set to `entry`.
    pub(super) fn with_locale(&self, locale: &str, entry: LocaleClips) -> Self {
        let mut locales = self.locales.clone();
        locales.insert(locale.to_string(), entry);
        Self { locales }
    }
}
