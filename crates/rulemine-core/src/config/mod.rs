//! Configuration system for rulemine.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod enrichment_config;
pub mod rulemine_config;
pub mod scan_config;

pub use analysis_config::{AmbiguousIncludePolicy, AnalysisConfig};
pub use enrichment_config::EnrichmentConfig;
pub use rulemine_config::{CliOverrides, RuleMineConfig};
pub use scan_config::ScanConfig;
