use super::Language;

// Vietnamese letters outside the Latin-1/Latin Extended Additional block
const VIETNAMESE_EXTRA: &str = "ĂÂĐÊÔƠƯăâđêôơư";
const UMLAUTS: &str = "äöüÄÖÜß";

fn is_hangul_or_han(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}'
        | '\u{1100}'..='\u{11FF}'
        | '\u{3130}'..='\u{318F}'
        | '\u{4E00}'..='\u{9FFF}')
}

fn is_vietnamese_char(c: char) -> bool {
    VIETNAMESE_EXTRA.contains(c) || (('\u{C0}'..='\u{1EF9}').contains(&c) && !UMLAUTS.contains(c))
}

pub fn has_korean(text: &str) -> bool {
    text.chars().any(is_hangul_or_han)
}

pub fn has_vietnamese(text: &str) -> bool {
    text.chars().any(is_vietnamese_char)
}

/// Umlaut words or plain Latin words, as long as no Vietnamese letter shows up.
///
/// Any unaccented Latin text lands here too, English included.
pub fn has_german(text: &str) -> bool {
    !has_vietnamese(text)
        && text
            .chars()
            .any(|c| UMLAUTS.contains(c) || c.is_ascii_alphabetic())
}

impl Language {
    /// Whether `text` looks like it is written in this language.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Language::Korean => has_korean(text),
            Language::Vietnamese => has_vietnamese(text),
            Language::German => has_german(text),
        }
    }
}

/// Classifies `text` against a language tag; unknown tags never match.
pub fn is_language(text: &str, tag: &str) -> bool {
    Language::from_tag(tag).is_some_and(|lang| lang.matches(text))
}
