//! File-backed `tracing` setup for the terminal front end.
//!
//! Logs go to `<data-local-dir>/regform/regform.log` so they never draw over
//! the UI. `RUST_LOG` selects the filter; the default is `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "regform.log";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// An I/O error occurred while creating the log directory or file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a local data directory.
    #[error("could not determine local data directory")]
    NoDataDir,

    /// `RUST_LOG` holds a directive that does not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("could not install log subscriber: {0}")]
    Init(String),
}

/// Returns the directory the log file lives in.
pub fn default_log_dir() -> Result<PathBuf, TelemetryError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("regform"))
        .ok_or(TelemetryError::NoDataDir)
}

/// Opens (creating if needed) the log file inside `dir` for appending.
pub fn open_log_file(dir: &Path) -> Result<(PathBuf, File), TelemetryError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Builds the filter from `directives`, falling back to `info` when unset.
pub fn env_filter(directives: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    match directives {
        Some(d) if !d.trim().is_empty() => Ok(EnvFilter::try_new(d)?),
        _ => Ok(EnvFilter::new("info")),
    }
}

/// Installs the global subscriber and returns the log file path.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init() -> Result<PathBuf, TelemetryError> {
    let directives = std::env::var("RUST_LOG").ok();
    let filter = env_filter(directives.as_deref())?;
    let (path, file) = open_log_file(&default_log_dir()?)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn open_log_file_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let (path, _file) = open_log_file(&nested).unwrap();
        assert_eq!(path, nested.join(LOG_FILE_NAME));
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        {
            let (_, mut file) = open_log_file(dir.path()).unwrap();
            writeln!(file, "first").unwrap();
        }
        {
            let (_, mut file) = open_log_file(dir.path()).unwrap();
            writeln!(file, "second").unwrap();
        }
        let contents = fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn env_filter_defaults_to_info() {
        assert!(env_filter(None).is_ok());
        assert!(env_filter(Some("  ")).is_ok());
    }

    #[test]
    fn env_filter_accepts_directives() {
        assert!(env_filter(Some("regform=debug")).is_ok());
    }

    #[test]
    fn env_filter_rejects_bad_level() {
        assert!(matches!(
            env_filter(Some("regform=loud")),
            Err(TelemetryError::Filter(_))
        ));
    }

    #[test]
    fn no_data_dir_message() {
        assert_eq!(
            TelemetryError::NoDataDir.to_string(),
            "could not determine local data directory"
        );
    }
}
