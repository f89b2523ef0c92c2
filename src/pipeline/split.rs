use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::PosMatcher;
use crate::text::{normalize, sanitize_meaning};

// "* danh từ - meaning": a star, words without dashes, a dash, the rest
static MARKER_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\s*([^\s\-—–]+(?:\s+[^\s\-—–]+)*)\s*[-—–]\s*(.+)$").unwrap()
});

/// How the category of a definition line was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    /// The line declared its category with a `* Type - meaning` marker.
    Explicit { entry_type: String, meaning: String },
    /// No marker; the category has to be inferred from the meaning.
    Inferred { meaning: String },
}

impl Split {
    pub fn meaning(&self) -> &str {
        match self {
            Split::Explicit { meaning, .. } | Split::Inferred { meaning } => meaning,
        }
    }

    /// `(type, meaning)`; a declared type is used as written, otherwise the
    /// matcher looks for a keyword in the meaning.
    pub fn resolve(self, matcher: &PosMatcher) -> (String, String) {
        match self {
            Split::Explicit { entry_type, meaning } => (entry_type, meaning),
            Split::Inferred { meaning } => (matcher.find(&meaning), meaning),
        }
    }
}

pub fn split_definition(line: &str) -> Split {
    let line = normalize(line);
    match MARKER_SPLIT.captures(&line) {
        Some(caps) => Split::Explicit {
            entry_type: caps[1].trim().to_string(),
            meaning: sanitize_meaning(caps[2].trim()),
        },
        None => Split::Inferred {
            meaning: sanitize_meaning(&line),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_marker() {
        let split = split_definition("* danh từ - loài vật có xương sống");
        assert_eq!(
            split,
            Split::Explicit {
                entry_type: "danh từ".to_string(),
                meaning: "loài vật có xương sống".to_string(),
            }
        );
    }

    #[test]
    fn test_explicit_marker_with_em_dash_and_annotations() {
        let split = split_definition("*Substantiv — das Haus (Gebäude).");
        assert_eq!(
            split,
            Split::Explicit {
                entry_type: "Substantiv".to_string(),
                meaning: "das Haus".to_string(),
            }
        );
    }

    #[test]
    fn test_explicit_type_not_checked_against_vocabulary() {
        let matcher = PosMatcher::for_language("vi");
        let (entry_type, meaning) = split_definition("* cụm từ - đi chơi động từ").resolve(&matcher);
        assert_eq!(entry_type, "cụm từ");
        assert_eq!(meaning, "đi chơi động từ");
    }

    #[test]
    fn test_no_marker_infers_type() {
        let matcher = PosMatcher::for_language("ko");
        let split = split_definition("명사. 서로 아끼고 귀중히 여기는 마음");
        assert!(matches!(split, Split::Inferred { .. }));
        let (entry_type, meaning) = split.resolve(&matcher);
        assert_eq!(entry_type, "명사");
        assert_eq!(meaning, "명사. 서로 아끼고 귀중히 여기는 마음");
    }

    #[test]
    fn test_star_without_dash_is_inferred() {
        let split = split_definition("* just words");
        assert_eq!(
            split,
            Split::Inferred {
                meaning: "* just words".to_string()
            }
        );
    }

    #[test]
    fn test_leading_parenthetical_removed() {
        assert_eq!(split_definition("(informal) hello there").meaning(), "hello there");
    }
}
