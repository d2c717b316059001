use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not create log file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install log subscriber: {0}")]
    Init(String),
}

/// `<data_local_dir>/tasklist/tasklist.log`, falling back to the working
/// directory
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklist")
        .join("tasklist.log")
}

/// Send tracing output to a file. The terminal belongs to the TUI, so
/// nothing is ever written to stdout/stderr.
pub fn setup_logging(path: &Path, verbose: bool) -> Result<(), LoggingError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| LoggingError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    let file = fs::File::create(path).map_err(|e| LoggingError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    info!(verbose, "logging initialized");
    Ok(())
}
