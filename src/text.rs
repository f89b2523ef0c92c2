//! Text cleanup shared by every extraction stage.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&(gt|lt|amp);").unwrap());

// Artifacts such as "--", ".-", "=-" left at the start of a line
static LEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[.\-!=)]*-+\s*)+").unwrap());

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{.*?\}|\(.*?\)|\[.*?\]").unwrap());

const MEANING_TRIM: &[char] = &[
    ' ', '-', '—', '–', ':', ';', ',', '.', '。', '!', '！', '?', '？',
];

fn decode_entities(s: &str) -> String {
    let mut current = s.to_string();
    // Calibre output is sometimes escaped twice ("&amp;gt;")
    while ENTITY.is_match(&current) {
        current = ENTITY
            .replace_all(&current, |caps: &regex::Captures| match &caps[1] {
                "gt" => ">",
                "lt" => "<",
                _ => "&",
            })
            .into_owned();
    }
    current
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Decodes entities, collapses whitespace and strips leading dash markers.
///
/// Never fails; blank input gives an empty string. Applying it twice gives
/// the same result as applying it once.
pub fn normalize(s: &str) -> String {
    let s = s.replace('\u{a0}', " ");
    let s = collapse_whitespace(&decode_entities(&s));
    LEADING_MARKER.replace(&s, "").into_owned()
}

/// Cleans a meaning: drops `{}`, `()` and `[]` annotations and trims
/// punctuation left at either end.
pub fn sanitize_meaning(text: &str) -> String {
    let s = normalize(text);
    let s = BRACKETED.replace_all(&s, "");
    collapse_whitespace(&s)
        .trim_matches(MEANING_TRIM)
        .trim()
        .to_string()
}
