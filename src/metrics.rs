//! Counters for extraction outcomes.
//!
//! Nothing installs a recorder here, so the counters cost nothing unless the
//! embedding application sets one up.

/// Per-document outcome counts of one extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub located: usize,
    pub rejected_language: usize,
    pub empty_meaning: usize,
    pub duplicates: usize,
    pub kept: usize,
}

pub struct ExtractionMetrics;

impl ExtractionMetrics {
    pub fn record(source_language: &str, stats: &ExtractionStats) {
        let lang = source_language.to_string();
        ::metrics::counter!("lexicon_pairs_located_total", "source" => lang.clone())
            .increment(stats.located as u64);
        ::metrics::counter!("lexicon_pairs_rejected_language_total", "source" => lang.clone())
            .increment(stats.rejected_language as u64);
        ::metrics::counter!("lexicon_pairs_empty_meaning_total", "source" => lang.clone())
            .increment(stats.empty_meaning as u64);
        ::metrics::counter!("lexicon_entries_duplicate_total", "source" => lang.clone())
            .increment(stats.duplicates as u64);
        ::metrics::counter!("lexicon_entries_kept_total", "source" => lang)
            .increment(stats.kept as u64);
    }

    pub fn record_written(rows: usize) {
        ::metrics::counter!("lexicon_entries_written_total").increment(rows as u64);
    }
}
