//! File-level jobs: one document in, one table out, many documents in parallel.

use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::convert::file_stem;
use crate::error::{ExtractorError, Result};
use crate::output::{write_table, OutputFormat};
use crate::parser::Document;
use crate::pipeline::Pipeline;

#[derive(Debug, Clone)]
pub struct ExtractParams {
    pub source_language: String,
    pub target_language: String,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub entries: usize,
}

/// HTML files to process: the file itself, or the `.html`/`.htm` files of a
/// directory in name order.
pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        if !path.exists() {
            return Err(ExtractorError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("input not found: {}", path.display()),
            )));
        }
        return Ok(vec![path.to_path_buf()]);
    }
    let mut inputs: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        })
        .collect();
    inputs.sort();
    Ok(inputs)
}

/// Loads, extracts and writes a single document.
#[instrument(skip(pipeline, params), fields(source = %params.source_language))]
pub fn extract_file(pipeline: &Pipeline, input: &Path, params: &ExtractParams) -> Result<ExtractResult> {
    let document = Document::load(input)?;
    let table = pipeline.extract(&document, &params.source_language, &params.target_language);
    let output = write_table(&table, &params.out_dir, &file_stem(input), params.format)?;
    Ok(ExtractResult {
        input: input.to_path_buf(),
        output,
        entries: table.len(),
    })
}

/// Runs [`extract_file`] for every input on the blocking pool.
///
/// Each document is parsed and written by its own task. Inputs whose output
/// file would clash with an earlier input are rejected instead of run.
pub async fn extract_batch(
    pipeline: Arc<Pipeline>,
    inputs: Vec<PathBuf>,
    params: ExtractParams,
) -> Vec<(PathBuf, Result<ExtractResult>)> {
    info!("Extracting {} document(s)", inputs.len());
    let params = Arc::new(params);
    let mut stems = HashSet::new();
    let mut handles = Vec::new();
    let mut results = Vec::new();

    for input in inputs {
        if !stems.insert(file_stem(&input)) {
            warn!("Skipping {}: output name already used in this batch", input.display());
            let err = ExtractorError::Config(format!(
                "output for {} collides with another input of the same name",
                input.display()
            ));
            results.push((input, Err(err)));
            continue;
        }
        let pipeline = Arc::clone(&pipeline);
        let params = Arc::clone(&params);
        let path = input.clone();
        let handle = tokio::task::spawn_blocking(move || extract_file(&pipeline, &path, &params));
        handles.push((input, handle));
    }

    for (input, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(ExtractorError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("extraction task failed: {}", e),
            ))),
        };
        if let Err(e) = &result {
            error!("Extraction failed for {}: {}", input.display(), e);
        }
        results.push((input, result));
    }
    results
}
