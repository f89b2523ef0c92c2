use once_cell::sync::Lazy;
use scraper::element_ref::Select;
use scraper::{ElementRef, Node, Selector};

use super::Document;
use crate::config::ExtractionConfig;
use crate::constants::{DEFAULT_HEADWORD_TAG, DEFAULT_SECTION_TAG, FRAME_SECTION_TAG};
use crate::error::{ExtractorError, Result};
use crate::text::normalize;
use crate::types::RawPair;

fn parse_selector(tag: &str) -> Result<Selector> {
    Selector::parse(tag)
        .map_err(|e| ExtractorError::Config(format!("Invalid tag selector '{}': {:?}", tag, e)))
}

static DEFAULT_LAYOUT: Lazy<HeadingLayout> = Lazy::new(|| {
    HeadingLayout::new(DEFAULT_HEADWORD_TAG, DEFAULT_SECTION_TAG).unwrap()
});

/// Which elements mark headwords and which group them into sections.
#[derive(Debug, Clone)]
pub struct HeadingLayout {
    headword: Selector,
    section: Selector,
}

impl HeadingLayout {
    pub fn new(headword_tag: &str, section_tag: &str) -> Result<Self> {
        let section_tag = section_tag.trim();
        let section_tag = if section_tag.eq_ignore_ascii_case(DEFAULT_SECTION_TAG) {
            FRAME_SECTION_TAG
        } else {
            section_tag
        };
        Ok(Self {
            headword: parse_selector(headword_tag.trim())?,
            section: parse_selector(section_tag)?,
        })
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Self::new(&config.headword_tag, &config.section_tag)
    }
}

impl Default for HeadingLayout {
    /// Calibre output: `h2` headwords grouped under framesets.
    fn default() -> Self {
        DEFAULT_LAYOUT.clone()
    }
}

/// Finds headword headings and the definition line that follows each.
pub struct EntryLocator<'a> {
    document: &'a Document,
    layout: &'a HeadingLayout,
}

impl<'a> EntryLocator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self::with_layout(document, &DEFAULT_LAYOUT)
    }

    pub fn with_layout(document: &'a Document, layout: &'a HeadingLayout) -> Self {
        Self { document, layout }
    }

    /// Frame sections in document order, or the whole document when there are none.
    fn sections(&self) -> Vec<ElementRef<'a>> {
        let sections: Vec<_> = self.document.html().select(&self.layout.section).collect();
        if sections.is_empty() {
            vec![self.document.html().root_element()]
        } else {
            sections
        }
    }

    /// Number of headword headings seen across all sections.
    pub fn heading_count(&self) -> usize {
        self.sections()
            .iter()
            .map(|section| section.select(&self.layout.headword).count())
            .sum()
    }

    /// Lazily yields every usable pair. Each call walks the document afresh.
    pub fn pairs(&self) -> RawPairs<'_> {
        RawPairs {
            locator: self,
            sections: self.sections().into_iter(),
            headings: None,
        }
    }

    fn is_headword(&self, element: ElementRef<'_>) -> bool {
        self.layout.headword.matches(&element)
    }

    /// Text of the first sibling after `heading` that carries any; empty if
    /// another headword comes first.
    fn meaning_line(&self, heading: ElementRef<'_>) -> String {
        for sibling in heading.next_siblings() {
            match sibling.value() {
                Node::Text(text) => {
                    let content: &str = text;
                    if !content.trim().is_empty() {
                        return content.to_string();
                    }
                }
                Node::Element(_) => {
                    let Some(element_ref) = ElementRef::wrap(sibling) else {
                        continue;
                    };
                    if self.is_headword(element_ref) {
                        return String::new();
                    }
                    let text = element_ref
                        .text()
                        .map(str::trim)
                        .filter(|piece| !piece.is_empty())
                        .collect::<Vec<_>>()
                        .join(" ");
                    if !text.is_empty() {
                        return text;
                    }
                }
                _ => {}
            }
        }
        String::new()
    }

    fn pair_for(&self, heading: ElementRef<'_>) -> Option<RawPair> {
        let source = normalize(&heading.text().collect::<Vec<_>>().join(" "));
        if source.is_empty() {
            return None;
        }
        let definition = normalize(&self.meaning_line(heading));
        if definition.is_empty() {
            return None;
        }
        Some(RawPair { source, definition })
    }
}

/// Iterator over the pairs of one document, section by section.
pub struct RawPairs<'s> {
    locator: &'s EntryLocator<'s>,
    sections: std::vec::IntoIter<ElementRef<'s>>,
    headings: Option<Select<'s, 's>>,
}

impl<'s> Iterator for RawPairs<'s> {
    type Item = RawPair;

    fn next(&mut self) -> Option<RawPair> {
        loop {
            if let Some(headings) = self.headings.as_mut() {
                for heading in headings.by_ref() {
                    if let Some(pair) = self.locator.pair_for(heading) {
                        return Some(pair);
                    }
                }
            }
            let section = self.sections.next()?;
            self.headings = Some(section.select(&self.locator.layout.headword));
        }
    }
}
