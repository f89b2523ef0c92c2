//! Turning proprietary e-book dictionaries into the HTML the extractor reads.
//!
//! The heavy lifting is done by calibre's `ebook-convert`, which writes an
//! `.htmlz` (zip) archive; the main HTML member is copied out next to it.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{error, info};
use zip::ZipArchive;

use crate::error::{ExtractorError, Result};

pub struct Converter {
    command: String,
}

impl Converter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Converts `book` (MOBI/PRC/AZW…) to `<out_dir>/<stem>.html`.
    ///
    /// A non-zero exit of the converter is reported as
    /// [`ExtractorError::ConversionFailed`] and no HTML is produced.
    pub fn convert_to_html(&self, book: &Path, out_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(out_dir)?;
        let stem = file_stem(book);
        let htmlz_path = out_dir.join(format!("{}.htmlz", stem));

        info!("Running: {} {} {}", self.command, book.display(), htmlz_path.display());
        let output = Command::new(&self.command)
            .arg(book)
            .arg(&htmlz_path)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("Conversion failed for {}: {}", book.display(), stderr);
            return Err(ExtractorError::ConversionFailed {
                book: book.display().to_string(),
                status: output.status.to_string(),
                stderr,
            });
        }

        let result = extract_html_payload(&htmlz_path, out_dir, &stem);
        // The archive is only an intermediate
        let _ = fs::remove_file(&htmlz_path);
        let html_path = result?;
        info!("Converted {} to {}", book.display(), html_path.display());
        Ok(html_path)
    }
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string())
}

/// Copies the primary HTML member of an `.htmlz` archive to `<out_dir>/<stem>.html`.
///
/// `index.html` is preferred; otherwise the first `.html` member in archive order.
pub fn extract_html_payload(htmlz_path: &Path, out_dir: &Path, stem: &str) -> Result<PathBuf> {
    let file = fs::File::open(htmlz_path)?;
    let mut archive = ZipArchive::new(file)?;

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    let member = names
        .iter()
        .find(|name| name.to_lowercase().ends_with("index.html"))
        .or_else(|| names.iter().find(|name| name.to_lowercase().ends_with(".html")))
        .ok_or_else(|| ExtractorError::NoHtmlPayload(htmlz_path.display().to_string()))?
        .clone();

    let mut content = Vec::new();
    archive.by_name(&member)?.read_to_end(&mut content)?;

    let final_html = out_dir.join(format!("{}.html", stem));
    fs::write(&final_html, content)?;
    Ok(final_html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_archive(path: &Path, members: &[(&str, &str)]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, body) in members {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_index_html_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let htmlz = dir.path().join("dict.htmlz");
        write_archive(
            &htmlz,
            &[("style.css", "h2{}"), ("other.html", "other"), ("index.html", "<h2>main</h2>")],
        );
        let path = extract_html_payload(&htmlz, dir.path(), "dict").unwrap();
        assert_eq!(path, dir.path().join("dict.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<h2>main</h2>");
    }

    #[test]
    fn test_falls_back_to_any_html_member() {
        let dir = tempfile::tempdir().unwrap();
        let htmlz = dir.path().join("dict.htmlz");
        write_archive(&htmlz, &[("metadata.opf", "x"), ("book.html", "body")]);
        let path = extract_html_payload(&htmlz, dir.path(), "dict").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "body");
    }

    #[test]
    fn test_archive_without_html_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let htmlz = dir.path().join("dict.htmlz");
        write_archive(&htmlz, &[("cover.jpg", "jpg")]);
        assert!(matches!(
            extract_html_payload(&htmlz, dir.path(), "dict"),
            Err(ExtractorError::NoHtmlPayload(_))
        ));
    }

    #[test]
    fn test_missing_converter_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let converter = Converter::new("definitely-not-a-real-ebook-convert");
        let result = converter.convert_to_html(Path::new("book.mobi"), dir.path());
        assert!(matches!(result, Err(ExtractorError::Io(_))));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("/tmp/Viet-Kor.mobi")), "Viet-Kor");
    }
}
