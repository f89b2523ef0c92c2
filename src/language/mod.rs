//! Per-language heuristics: script detection and part-of-speech keywords.

pub mod detector;
pub mod pos;

pub use detector::is_language;
pub use pos::PosMatcher;

use crate::constants::{GERMAN_TAG, KOREAN_TAG, VIETNAMESE_TAG};

/// Source languages the heuristics know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Vietnamese,
    Korean,
    German,
}

impl Language {
    /// Resolves a tag such as `vi`; unknown tags give `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            VIETNAMESE_TAG => Some(Language::Vietnamese),
            KOREAN_TAG => Some(Language::Korean),
            GERMAN_TAG => Some(Language::German),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::Vietnamese => VIETNAMESE_TAG,
            Language::Korean => KOREAN_TAG,
            Language::German => GERMAN_TAG,
        }
    }
}
