use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Conversion of {book} failed with status {status}: {stderr}")]
    ConversionFailed {
        book: String,
        status: String,
        stderr: String,
    },

    #[error("No HTML payload found in {0}")]
    NoHtmlPayload(String),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
