//! Error handling for rulemine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod enrichment_error;
pub mod error_code;
pub mod extraction_error;
pub mod pipeline_error;
pub mod scan_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use enrichment_error::EnrichmentError;
pub use error_code::RuleMineErrorCode;
pub use extraction_error::ExtractionError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use scan_error::ScanError;
