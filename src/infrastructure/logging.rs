use crate::application::{AppError, AppResult};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where tracing output goes.
///
/// The interactive UI owns the terminal, so it logs only to a file.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Disabled,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn for_mode(headless: bool, log_file: Option<&Path>) -> Self {
        match (log_file, headless) {
            (Some(path), _) => LogTarget::File(path.to_path_buf()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        }
    }
}

/// Builds the filter from `RUST_LOG` when present, else from `level`.
pub fn build_filter(level: &str, rust_log: Option<&str>) -> AppResult<EnvFilter> {
    let directive = rust_log.filter(|d| !d.trim().is_empty()).unwrap_or(level);
    EnvFilter::try_new(directive).map_err(|e| AppError::Logging(e.to_string()))
}

pub fn open_log_file(path: &Path) -> AppResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Installs the global tracing subscriber for `target`.
pub fn init_logging(target: &LogTarget, level: &str) -> AppResult<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(level, rust_log.as_deref())?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    installed.map_err(|e| AppError::Logging(e.to_string()))
}
