//! End-to-end analysis: scan, extract, resolve, model, discover, analyze.

pub mod runner;
pub mod types;

pub use runner::AnalysisPipeline;
pub use types::{AnalysisOutput, PipelineStats};
