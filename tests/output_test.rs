use std::fs;
use std::io::Read;
use std::sync::Arc;

use anyhow::Result;
use lexicon_extractor::output::{write_table, OutputFormat};
use lexicon_extractor::tasks::{collect_inputs, extract_batch, ExtractParams};
use lexicon_extractor::{Document, Pipeline};
use tempfile::tempdir;

const KO_GLOSSARY: &str = "<html><body><frameset>\
    <h2>사랑</h2>명사. 서로 아끼고 귀중히 여기는 마음\
    <h2>사랑</h2>다른 뜻\
    <h2>가다</h2>* 동사 - đi\
    </frameset></body></html>";

fn zip_member(path: &std::path::Path, name: &str) -> Result<String> {
    let mut archive = zip::ZipArchive::new(fs::File::open(path)?)?;
    let mut content = String::new();
    archive.by_name(name)?.read_to_string(&mut content)?;
    Ok(content)
}

#[test]
fn test_write_json_table() -> Result<()> {
    let temp_dir = tempdir()?;
    let table = Pipeline::new().extract(&Document::parse(KO_GLOSSARY), "ko", "vi");
    let path = write_table(&table, temp_dir.path(), "korean", OutputFormat::Json)?;
    assert_eq!(path, temp_dir.path().join("korean.json"));

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(written["sheet"], "KO->VI");
    let rows = written["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Source"], "사랑");
    assert_eq!(rows[0]["Type"], "명사");
    assert_eq!(rows[1]["Source"], "가다");
    assert_eq!(rows[1]["Type"], "동사");
    assert_eq!(rows[1]["Target"], "đi");
    Ok(())
}

#[test]
fn test_write_xlsx_table() -> Result<()> {
    let temp_dir = tempdir()?;
    let out_dir = temp_dir.path().join("nested").join("out");
    let table = Pipeline::new().extract(&Document::parse(KO_GLOSSARY), "ko", "vi");
    let path = write_table(&table, &out_dir, "korean", OutputFormat::Xlsx)?;
    assert_eq!(path, out_dir.join("korean.xlsx"));

    let workbook = zip_member(&path, "xl/workbook.xml")?;
    assert!(workbook.contains("KO-"));
    let strings = zip_member(&path, "xl/sharedStrings.xml")?;
    for expected in ["Source", "Type", "Pronunciation", "Target", "사랑", "가다"] {
        assert!(strings.contains(expected), "missing {expected}");
    }
    assert!(!strings.contains("다른 뜻"));
    Ok(())
}

#[tokio::test]
async fn test_extract_batch_writes_one_file_per_document() -> Result<()> {
    let temp_dir = tempdir()?;
    let input_dir = temp_dir.path().join("html");
    fs::create_dir_all(&input_dir)?;
    fs::write(input_dir.join("first.html"), KO_GLOSSARY)?;
    fs::write(input_dir.join("second.html"), "<h2>물</h2>water")?;
    fs::write(input_dir.join("second.htm"), "<h2>불</h2>fire")?;

    let inputs = collect_inputs(&input_dir)?;
    let params = ExtractParams {
        source_language: "ko".to_string(),
        target_language: "en".to_string(),
        out_dir: temp_dir.path().join("out"),
        format: OutputFormat::Json,
    };
    let results = extract_batch(Arc::new(Pipeline::new()), inputs, params).await;
    assert_eq!(results.len(), 3);

    let ok: Vec<_> = results.iter().filter_map(|(_, r)| r.as_ref().ok()).collect();
    assert_eq!(ok.len(), 2);
    let first = ok.iter().find(|r| r.input.ends_with("first.html")).unwrap();
    assert_eq!(first.entries, 2);
    assert!(temp_dir.path().join("out").join("first.json").exists());
    assert!(temp_dir.path().join("out").join("second.json").exists());

    // second.htm sorts first, so second.html is the one that collides
    let failed: Vec<_> = results.iter().filter(|(_, r)| r.is_err()).collect();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].0.ends_with("second.html"));
    Ok(())
}
