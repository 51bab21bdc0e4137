//! Error types for crewkit-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while validating a context file.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the file that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`ValidateError`].
pub type ValidateResult<T> = Result<T, ValidateError>;
