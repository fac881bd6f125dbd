//! Logging setup with file output.
//!
//! The terminal belongs to the TUI, so logs only ever go to a file.
//!
//! ## Environment Variables
//!
//! 1. **`PKGLOG_LOG`** (highest priority) - pkglog-specific filter
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for pkglog
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/pkglog/logs/pkglog-<pid>.log`
//! - macOS: `~/Library/Application Support/pkglog/logs/pkglog-12345.log`
//! - Linux: `~/.local/share/pkglog/logs/pkglog-12345.log`
//!
//! Override with `--log-file <path>` or `PKGLOG_LOG_FILE`.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "warn,pkglog=info";

/// Errors that can occur while setting up logging
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to create log directory: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Initialize file logging.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program;
/// dropping it flushes and stops the background file writer.
pub fn init(log_file: Option<PathBuf>) -> Result<LogGuard, LogError> {
    let (log_dir, filename) = resolve_log_path(log_file);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_filter()?);

    Registry::default().with(file_layer).try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

fn create_filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    let directives = env::var("PKGLOG_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    EnvFilter::try_new(directives)
}

/// Split the log location into directory and file name
///
/// A path with an extension names the file; anything else names the directory.
fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("pkglog-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pkglog")
        .join("logs");

    (dir, filename)
}
