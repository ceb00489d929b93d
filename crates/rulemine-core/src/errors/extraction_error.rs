//! Component extraction errors.

use super::error_code::{self, RuleMineErrorCode};

/// Errors raised while preparing extraction.
///
/// Ambiguous or unmatched source text is never an error: the affected
/// function, class or template is simply omitted from the component.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid pattern {name}: {message}")]
    InvalidPattern { name: String, message: String },
}

impl RuleMineErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        error_code::EXTRACTION_ERROR
    }
}
