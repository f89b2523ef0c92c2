use serde::{Deserialize, Serialize};

/// A headword and the raw definition line found after it.
///
/// Only lives for one extraction pass; both fields are already normalized
/// and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    pub source: String,
    pub definition: String,
}

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Type")]
    pub entry_type: String,
    /// Reserved for a later enrichment stage; always empty here.
    #[serde(rename = "Pronunciation")]
    pub pronunciation: String,
    #[serde(rename = "Target")]
    pub target: String,
}

impl LexicalEntry {
    pub fn new(source: String, entry_type: String, target: String) -> Self {
        Self {
            source,
            entry_type,
            pronunciation: String::new(),
            target,
        }
    }
}

/// Source and target language tags of a run, as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Label of the single sheet in the output file, e.g. `VI->KO`.
    pub fn sheet_name(&self) -> String {
        format!(
            "{}->{}",
            self.source.to_uppercase(),
            self.target.to_uppercase()
        )
    }
}

/// Deduplicated entries of one document, in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct OutputTable {
    pub language_pair: LanguagePair,
    pub entries: Vec<LexicalEntry>,
}

impl OutputTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, source: &str) -> Option<&LexicalEntry> {
        self.entries.iter().find(|e| e.source == source)
    }
}
