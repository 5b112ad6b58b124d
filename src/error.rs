//! Error types for licensescheck.
//!
//! Violations found in source files are *reported*, not raised; every variant
//! here is fatal and aborts the run.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error for licensescheck operations.
#[derive(Error, Debug)]
pub enum LicenseCheckError {
    /// A source file, license bundle or directory could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A repaired file or its backup could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed below a scanned root.
    #[error("failed to walk '{}': {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// The configuration file is malformed or holds invalid values.
    #[error("{0}")]
    Config(String),
}

impl LicenseCheckError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LicenseCheckError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LicenseCheckError::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FATAL
    }
}

/// Result type alias for licensescheck operations.
pub type Result<T> = std::result::Result<T, LicenseCheckError>;
