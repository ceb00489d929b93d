//! Enrichment collaborator errors.

use super::error_code::{self, RuleMineErrorCode};

/// Errors reported by the external enrichment collaborator.
///
/// Always recoverable: the affected batch stays unenriched.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Enrichment request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed enrichment response: {0}")]
    MalformedResponse(String),

    #[error("Enrichment timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl RuleMineErrorCode for EnrichmentError {
    fn error_code(&self) -> &'static str {
        error_code::ENRICHMENT_ERROR
    }
}
