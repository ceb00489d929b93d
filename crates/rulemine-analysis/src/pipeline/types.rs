//! Pipeline output.

use serde::{Deserialize, Serialize};

use crate::domain::DomainCandidates;
use crate::model::ProjectModel;
use crate::rules::Rule;

/// Counters and phase timings for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub files_discovered: usize,
    pub files_failed: usize,
    pub includes_resolved: usize,
    pub includes_ambiguous: usize,
    pub domains_discovered: usize,
    pub rule_candidates: usize,
    pub rules_fused: usize,
    pub rules_uncertain: usize,
    pub discovery_ms: u64,
    pub extraction_ms: u64,
    pub analysis_ms: u64,
}

/// Structural model plus rule model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub project: ProjectModel,
    pub domains: DomainCandidates,
    /// Fused rules, grouped by component in component order.
    pub rules: Vec<Rule>,
    pub stats: PipelineStats,
}
