//! One extraction pass over a glossary document.

pub mod split;

pub use split::{split_definition, Split};

use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::language::{Language, PosMatcher};
use crate::metrics::{ExtractionMetrics, ExtractionStats};
use crate::parser::{Document, EntryLocator, HeadingLayout};
use crate::types::{LanguagePair, LexicalEntry, OutputTable, RawPair};

/// Turns a document into a deduplicated table of entries.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    layout: HeadingLayout,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            layout: HeadingLayout::from_config(config)?,
        })
    }

    /// Builds the entry for a pair that already passed the language check.
    /// `None` when nothing is left of the meaning.
    pub fn build_entry(pair: RawPair, matcher: &PosMatcher) -> Option<LexicalEntry> {
        let (entry_type, meaning) = split_definition(&pair.definition).resolve(matcher);
        if meaning.is_empty() {
            return None;
        }
        Some(LexicalEntry::new(pair.source, entry_type, meaning))
    }

    /// Extracts the entries whose headword is in `source_language`.
    ///
    /// `target_language` only labels the table. An unknown source tag is not
    /// an error: nothing matches it and the table comes back empty.
    #[instrument(skip(self, document))]
    pub fn extract(
        &self,
        document: &Document,
        source_language: &str,
        target_language: &str,
    ) -> OutputTable {
        let (table, stats) = self.extract_with_stats(document, source_language, target_language);
        ExtractionMetrics::record(source_language, &stats);
        info!(
            "Extraction finished: located={} rejected_language={} empty_meaning={} duplicates={} kept={}",
            stats.located, stats.rejected_language, stats.empty_meaning, stats.duplicates, stats.kept
        );
        table
    }

    pub fn extract_with_stats(
        &self,
        document: &Document,
        source_language: &str,
        target_language: &str,
    ) -> (OutputTable, ExtractionStats) {
        let language = Language::from_tag(source_language);
        if language.is_none() {
            warn!("Unrecognized source language '{}'; no entry can match", source_language);
        }
        let matcher = PosMatcher::for_language(source_language);
        let locator = EntryLocator::with_layout(document, &self.layout);

        let mut stats = ExtractionStats::default();
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for pair in locator.pairs() {
            stats.located += 1;
            if !language.is_some_and(|lang| lang.matches(&pair.source)) {
                stats.rejected_language += 1;
                continue;
            }
            let source = pair.source.clone();
            let Some(entry) = Self::build_entry(pair, &matcher) else {
                debug!("Dropping '{}': empty meaning", source);
                stats.empty_meaning += 1;
                continue;
            };
            if !seen.insert(entry.source.clone()) {
                debug!("Dropping duplicate headword '{}'", entry.source);
                stats.duplicates += 1;
                continue;
            }
            entries.push(entry);
        }
        stats.kept = entries.len();

        if stats.located == 0 {
            warn!(
                "No headword/definition pairs found (headings={})",
                locator.heading_count()
            );
        }

        let table = OutputTable {
            language_pair: LanguagePair::new(source_language, target_language),
            entries,
        };
        (table, stats)
    }
}
