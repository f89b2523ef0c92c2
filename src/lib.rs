pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod language;
pub mod logging;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod tasks;
pub mod text;
pub mod types;

pub use error::{ExtractorError, Result};
pub use parser::Document;
pub use pipeline::Pipeline;
pub use types::{LanguagePair, LexicalEntry, OutputTable, RawPair};
