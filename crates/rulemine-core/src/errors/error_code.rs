//! RuleMineErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string that
/// callers can match on without parsing messages.
pub trait RuleMineErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const ROOT_NOT_FOUND: &str = "ROOT_NOT_FOUND";
pub const CANCELLED: &str = "CANCELLED";
pub const EXTRACTION_ERROR: &str = "EXTRACTION_ERROR";
pub const ANALYSIS_STATE_ERROR: &str = "ANALYSIS_STATE_ERROR";
pub const ENRICHMENT_ERROR: &str = "ENRICHMENT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
