/// Language tags accepted on the command line and in config files.
pub const VIETNAMESE_TAG: &str = "vi";
pub const KOREAN_TAG: &str = "ko";
pub const GERMAN_TAG: &str = "ge";

/// Column headers of the output table, in order.
pub const COLUMNS: [&str; 4] = ["Source", "Type", "Pronunciation", "Target"];

// Markup conventions of calibre's HTML output
pub const DEFAULT_HEADWORD_TAG: &str = "h2";
pub const DEFAULT_SECTION_TAG: &str = "frameset";

/// Element name that `<frameset>` is rewritten to before parsing, since an
/// HTML5 tree builder drops everything nested inside a real frameset.
pub const FRAME_SECTION_TAG: &str = "x-frameset";

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_CONFIG_PATH: &str = "lexicon.toml";
pub const DEFAULT_CONVERT_COMMAND: &str = "ebook-convert";

/// Get all supported language tags
pub fn get_supported_languages() -> Vec<&'static str> {
    vec![VIETNAMESE_TAG, KOREAN_TAG, GERMAN_TAG]
}
