//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, RuleMineErrorCode};

/// Errors that can occur while discovering and reading source files.
///
/// `RootNotFound` is a fatal precondition failure; every other variant is
/// scoped to a single file and recorded as non-fatal by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Project root does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    MaxFileSizeExceeded { path: PathBuf, size: u64, max: u64 },

    #[error("Unsupported encoding in {path}: {encoding}")]
    UnsupportedEncoding { path: PathBuf, encoding: String },

    #[error("Scan cancelled")]
    Cancelled,
}

impl RuleMineErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => error_code::ROOT_NOT_FOUND,
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::SCAN_ERROR,
        }
    }
}
