//! Rule analysis errors.

use super::error_code::{self, RuleMineErrorCode};

/// Errors raised by rule analyzers and domain discovery.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The domain-correlation analyzer ran before domain discovery.
    /// This is a caller ordering defect and must not be swallowed.
    #[error("Domain analyzer not prepared: run domain discovery before analyzing {component}")]
    DomainsNotPrepared { component: String },

    #[error("Invalid vocabulary entry for {field}: {message}")]
    InvalidVocabulary { field: String, message: String },
}

impl RuleMineErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYSIS_STATE_ERROR
    }
}
