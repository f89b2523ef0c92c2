//! Loading glossary HTML and walking it for headword/definition pairs.

pub mod locator;

pub use locator::{EntryLocator, HeadingLayout, RawPairs};

use crate::constants::FRAME_SECTION_TAG;
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::fs;
use std::path::Path;
use tracing::debug;

static FRAMESET_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<(/?)frameset\b").unwrap());

/// A parsed glossary document. Never mutated after parsing.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses markup. `<frameset>` sections are kept as ordinary elements so
    /// the headings nested in them survive tree building.
    pub fn parse(markup: &str) -> Self {
        let markup = FRAMESET_TAG.replace_all(markup, format!("<${{1}}{}", FRAME_SECTION_TAG));
        Self {
            html: Html::parse_document(&markup),
        }
    }

    /// Parses raw bytes, replacing invalid UTF-8 sequences.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!("Document: loaded {} bytes_len={}", path.display(), bytes.len());
        Ok(Self::from_bytes(&bytes))
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_frameset_content_survives_parsing() {
        let doc = Document::parse(
            "<html><frameset><h2>word</h2>meaning</frameset><FRAMESET><h2>two</h2></FRAMESET></html>",
        );
        let selector = Selector::parse(&format!("{} h2", FRAME_SECTION_TAG)).unwrap();
        let headings: Vec<String> = doc
            .html()
            .select(&selector)
            .map(|h| h.text().collect())
            .collect();
        assert_eq!(headings, vec!["word", "two"]);
    }

    #[test]
    fn test_from_bytes_tolerates_invalid_utf8() {
        let mut bytes = b"<h2>caf".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"</h2>");
        let doc = Document::from_bytes(&bytes);
        let selector = Selector::parse("h2").unwrap();
        let text: String = doc.html().select(&selector).next().unwrap().text().collect();
        assert_eq!(text, "caf\u{fffd}");
    }
}
