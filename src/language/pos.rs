use regex::{Regex, RegexBuilder};

use super::Language;

/// Part-of-speech keywords of one language and how to match them.
#[derive(Debug, Clone, Copy)]
pub struct PosVocabulary {
    pub keywords: &'static [&'static str],
    pub case_insensitive: bool,
    /// Lower-case the matched keyword before returning it.
    pub lowercase: bool,
}

const KOREAN: PosVocabulary = PosVocabulary {
    keywords: &[
        "명사", "동사", "형용사", "부사", "감탄사", "대명사", "조사", "전치사", "접속사",
    ],
    case_insensitive: false,
    lowercase: false,
};

const VIETNAMESE: PosVocabulary = PosVocabulary {
    keywords: &[
        "danh từ", "động từ", "tính từ", "phó từ", "thán từ", "đại từ", "giới từ", "liên từ",
    ],
    case_insensitive: true,
    lowercase: true,
};

const GERMAN: PosVocabulary = PosVocabulary {
    keywords: &[
        "Substantiv",
        "Verb",
        "Adjektiv",
        "Adverb",
        "Pronomen",
        "Präposition",
        "Konjunktion",
        "Interjektion",
        "Artikel",
    ],
    case_insensitive: true,
    lowercase: false,
};

impl Language {
    pub fn pos_vocabulary(&self) -> &'static PosVocabulary {
        match self {
            Language::Korean => &KOREAN,
            Language::Vietnamese => &VIETNAMESE,
            Language::German => &GERMAN,
        }
    }
}

/// Finds the first part-of-speech keyword in a meaning.
#[derive(Debug, Clone)]
pub struct PosMatcher {
    pattern: Option<Regex>,
    lowercase: bool,
}

impl PosMatcher {
    pub fn new(vocabulary: &PosVocabulary) -> Self {
        let mut keywords: Vec<&str> = vocabulary.keywords.to_vec();
        keywords.sort_unstable();
        keywords.dedup();
        // Longest first: when one keyword is a prefix of another ("Verb" and
        // "Verb phrase"), the alternation must try the longer one first
        keywords.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(vocabulary.case_insensitive)
            .build()
            .ok();

        Self {
            pattern,
            lowercase: vocabulary.lowercase,
        }
    }

    /// Matcher for a language tag; unknown tags get one that never matches.
    pub fn for_language(tag: &str) -> Self {
        match Language::from_tag(tag) {
            Some(lang) => Self::new(lang.pos_vocabulary()),
            None => Self::never(),
        }
    }

    pub fn never() -> Self {
        Self {
            pattern: None,
            lowercase: false,
        }
    }

    /// Returns the leftmost keyword found in `text`, or an empty string.
    pub fn find(&self, text: &str) -> String {
        let Some(found) = self.pattern.as_ref().and_then(|p| p.find(text)) else {
            return String::new();
        };
        if self.lowercase {
            found.as_str().to_lowercase()
        } else {
            found.as_str().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_keyword_found() {
        let matcher = PosMatcher::for_language("ko");
        assert_eq!(matcher.find("명사. 서로 아끼고 귀중히 여기는 마음"), "명사");
    }

    #[test]
    fn test_longer_keyword_preferred() {
        let matcher = PosMatcher::for_language("ko");
        assert_eq!(matcher.find("대명사 그것"), "대명사");

        let matcher = PosMatcher::for_language("ge");
        assert_eq!(matcher.find("Adverb: schnell"), "Adverb");
    }

    #[test]
    fn test_prefix_collision_takes_longer_keyword() {
        const SHORT_FIRST: &[&str] = &["Verb", "Verb phrase"];
        const LONG_FIRST: &[&str] = &["Verb phrase", "Verb"];
        for keywords in [SHORT_FIRST, LONG_FIRST] {
            let matcher = PosMatcher::new(&PosVocabulary {
                keywords,
                case_insensitive: false,
                lowercase: false,
            });
            assert_eq!(matcher.find("a Verb phrase here"), "Verb phrase");
            assert_eq!(matcher.find("a Verb here"), "Verb");
        }
    }

    #[test]
    fn test_leftmost_keyword_wins() {
        let matcher = PosMatcher::for_language("ge");
        assert_eq!(matcher.find("ein Verb oder Substantiv"), "Verb");
    }

    #[test]
    fn test_vietnamese_is_case_insensitive_and_lowercased() {
        let matcher = PosMatcher::for_language("vi");
        assert_eq!(matcher.find("Danh Từ chỉ người"), "danh từ");
        assert_eq!(matcher.find("ĐỘNG TỪ đi"), "động từ");
    }

    #[test]
    fn test_german_is_case_insensitive_but_preserves_case() {
        let matcher = PosMatcher::for_language("ge");
        assert_eq!(matcher.find("SUBSTANTIV, das Haus"), "SUBSTANTIV");
        assert_eq!(matcher.find("verb: gehen"), "verb");
    }

    #[test]
    fn test_korean_is_case_sensitive_no_match() {
        let matcher = PosMatcher::for_language("ko");
        assert_eq!(matcher.find("noun"), "");
    }

    #[test]
    fn test_unknown_language_never_matches() {
        let matcher = PosMatcher::for_language("fr");
        assert_eq!(matcher.find("명사 danh từ Verb"), "");
    }
}
