use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "extractor.log";
const DEFAULT_DIRECTIVES: &str = "lexicon_extractor=info,warn";

/// Sets up extraction logging: per-run progress on stderr, and one JSON
/// record per event in `logs/extractor.log.<date>` for batch post-mortems.
///
/// `RUST_LOG` overrides the default directives.
pub fn init_logging() {
    let _ = fs::create_dir_all(LOG_DIR);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    // The process exits right after the last table is written; leak the
    // guard so the writer thread lives until then.
    std::mem::forget(guard);
}
