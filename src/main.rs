use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

use lexicon_extractor::config::Config;
use lexicon_extractor::constants::{self, DEFAULT_CONFIG_PATH};
use lexicon_extractor::convert::Converter;
use lexicon_extractor::logging;
use lexicon_extractor::output::OutputFormat;
use lexicon_extractor::tasks::{collect_inputs, extract_batch, ExtractParams, ExtractResult};
use lexicon_extractor::{ExtractorError, Pipeline};

#[derive(Parser)]
#[command(name = "lexicon_extractor")]
#[command(about = "Extracts bilingual dictionary entries from converted e-book glossaries")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract entries from an HTML file or a directory of HTML files
    Extract {
        #[arg(long)]
        input: PathBuf,
        /// Language of the headwords (vi, ko, ge)
        #[arg(long)]
        source: String,
        /// Language of the meanings; only labels the output sheet
        #[arg(long)]
        target: String,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Convert an e-book dictionary to HTML with ebook-convert
    Convert {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Convert an e-book, then extract entries from the resulting HTML
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        source: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn print_report(results: &[(PathBuf, lexicon_extractor::Result<ExtractResult>)]) -> usize {
    let mut failures = 0;
    for (input, result) in results {
        match result {
            Ok(report) => {
                println!(
                    "✅ {} -> {} ({} entries)",
                    input.display(),
                    report.output.display(),
                    report.entries
                );
            }
            Err(e) => {
                failures += 1;
                println!("❌ {}: {}", input.display(), e);
            }
        }
    }
    failures
}

async fn run_extract(
    config: &Config,
    inputs: Vec<PathBuf>,
    source: String,
    target: String,
    out_dir: PathBuf,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if !constants::get_supported_languages().contains(&source.to_lowercase().as_str()) {
        println!(
            "⚠️  Unknown source language '{}'; supported: {}",
            source,
            constants::get_supported_languages().join(", ")
        );
    }
    let pipeline = Arc::new(Pipeline::from_config(&config.extraction)?);
    let params = ExtractParams {
        source_language: source,
        target_language: target,
        out_dir,
        format,
    };
    let results = extract_batch(pipeline, inputs, params).await;
    let failures = print_report(&results);
    if failures > 0 {
        anyhow::bail!("{} of {} document(s) failed", failures, results.len());
    }
    Ok(())
}

fn convert_book(config: &Config, input: &Path, out_dir: &Path) -> Result<PathBuf, ExtractorError> {
    Converter::new(config.conversion.command.clone()).convert_to_html(input, out_dir)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Extract {
            input,
            source,
            target,
            out_dir,
            format,
        } => {
            let inputs = collect_inputs(&input)?;
            if inputs.is_empty() {
                println!("⚠️  No HTML files found in {}", input.display());
                return Ok(());
            }
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir));
            let format = format.unwrap_or(config.output.format);
            run_extract(&config, inputs, source, target, out_dir, format).await?;
        }
        Commands::Convert { input, out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir));
            let html = convert_book(&config, &input, &out_dir)?;
            println!("✅ Converted {} -> {}", input.display(), html.display());
        }
        Commands::Run {
            input,
            source,
            target,
            out_dir,
            format,
        } => {
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir));
            let format = format.unwrap_or(config.output.format);

            println!("\n📥 Step 1: Converting {}...", input.display());
            let html = match convert_book(&config, &input, &out_dir) {
                Ok(html) => html,
                Err(e) => {
                    // Never extract from a failed conversion
                    error!("Conversion failed: {}", e);
                    return Err(e.into());
                }
            };

            println!("\n🔨 Step 2: Extracting entries...");
            info!("Extracting from converted document {}", html.display());
            run_extract(&config, vec![html], source, target, out_dir, format).await?;
        }
    }
    Ok(())
}
