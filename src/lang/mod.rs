//! Language codes shared by detection, translation and name resolution.

mod names;

use std::fmt;

use serde::Serialize;

pub use names::display_name;

const UNKNOWN: &str = "unknown";
const ENGLISH: &str = "en";

/// A short language identifier (ISO 639-1 where one exists, otherwise
/// ISO 639-3), or the `"unknown"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN.to_string())
    }

    pub fn english() -> Self {
        Self(ENGLISH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN
    }

    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }

    /// Replies are translated back only for a concrete, non-English language.
    pub fn needs_back_translation(&self) -> bool {
        !self.is_english() && !self.is_unknown()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source side of a translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Let the translation service detect the source language.
    Auto,
    Code(LanguageCode),
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::Auto => "auto",
            Source::Code(code) => code.as_str(),
        }
    }
}
