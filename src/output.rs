//! Writing an [`OutputTable`] to disk.

use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::constants::COLUMNS;
use crate::error::{ExtractorError, Result};
use crate::metrics::ExtractionMetrics;
use crate::types::{LexicalEntry, OutputTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One worksheet named after the language pair
    #[default]
    Xlsx,
    /// `{"sheet": ..., "rows": [...]}`
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "json" => Ok(OutputFormat::Json),
            other => Err(ExtractorError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Serialize)]
struct JsonSheet<'a> {
    sheet: String,
    rows: &'a [LexicalEntry],
}

/// `<out_dir>/<stem>.<ext>`
pub fn output_path(out_dir: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    out_dir.join(format!("{}.{}", stem, format.extension()))
}

/// Writes the table next to its siblings in `out_dir`, creating the
/// directory if needed, and returns the written path.
pub fn write_table(
    table: &OutputTable,
    out_dir: &Path,
    stem: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = output_path(out_dir, stem, format);
    match format {
        OutputFormat::Xlsx => write_xlsx(table, &path)?,
        OutputFormat::Json => write_json(table, &path)?,
    }
    ExtractionMetrics::record_written(table.len());
    info!("Wrote {} entries to {}", table.len(), path.display());
    Ok(path)
}

// Excel caps sheet names at 31 characters and rejects these
const SHEET_NAME_MAX: usize = 31;
const SHEET_NAME_FORBIDDEN: &[char] = &['/', '\\', '?', '*', '[', ']', ':'];

/// Sheet name Excel will accept, derived from the language pair label.
pub fn worksheet_name(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .filter(|c| !SHEET_NAME_FORBIDDEN.contains(c))
        .take(SHEET_NAME_MAX)
        .collect();
    let cleaned = cleaned.trim_matches('\'');
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}

fn write_xlsx(table: &OutputTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(worksheet_name(&table.language_pair.sheet_name()))?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (i, entry) in table.entries.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, entry.source.as_str())?;
        worksheet.write_string(row, 1, entry.entry_type.as_str())?;
        worksheet.write_string(row, 2, entry.pronunciation.as_str())?;
        worksheet.write_string(row, 3, entry.target.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_json(table: &OutputTable, path: &Path) -> Result<()> {
    let sheet = JsonSheet {
        sheet: table.language_pair.sheet_name(),
        rows: &table.entries,
    };
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &sheet)?;
    Ok(())
}
