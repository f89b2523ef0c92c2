use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::{
    DEFAULT_CONVERT_COMMAND, DEFAULT_HEADWORD_TAG, DEFAULT_OUTPUT_DIR, DEFAULT_SECTION_TAG,
};
use crate::error::{ExtractorError, Result};
use crate::output::OutputFormat;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
    pub conversion: ConversionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub headword_tag: String,
    pub section_tag: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            headword_tag: DEFAULT_HEADWORD_TAG.to_string(),
            section_tag: DEFAULT_SECTION_TAG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_OUTPUT_DIR.to_string(),
            format: OutputFormat::Xlsx,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Executable that turns an e-book into an `.htmlz` archive.
    pub command: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_CONVERT_COMMAND.to_string(),
        }
    }
}

impl Config {
    /// Reads the TOML file at `path`; a missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            ExtractorError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
