//! Logging and tracing initialization.
//!
//! Reports print to stdout; log output goes to a file (when
//! `CREWKIT_LOG_PATH` or `CREWKIT_LOG_DIR` is set) or stderr, so piping
//! stdout stays clean for scripting.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Build the log filter from CLI verbosity flags.
///
/// `RUST_LOG` wins when set; otherwise `-q` maps to `error`, each `-v`
/// steps warn → info → debug → trace.
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// Returns the appender guard that must stay alive for the duration of the
/// process when logging to a file.
pub fn init(filter: EnvFilter) -> anyhow::Result<Option<WorkerGuard>> {
    if let Some((dir, file_name)) = log_file_destination() {
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}

/// Resolve the log file destination from the environment, if any.
///
/// `CREWKIT_LOG_PATH` names an exact file; `CREWKIT_LOG_DIR` gets a
/// `crewkit.log` inside it.
fn log_file_destination() -> Option<(PathBuf, PathBuf)> {
    if let Ok(path) = std::env::var("CREWKIT_LOG_PATH") {
        let path = PathBuf::from(path);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let file_name = PathBuf::from(path.file_name()?);
        return Some((dir, file_name));
    }
    if let Ok(dir) = std::env::var("CREWKIT_LOG_DIR") {
        return Some((PathBuf::from(dir), PathBuf::from("crewkit.log")));
    }
    None
}
