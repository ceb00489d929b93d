//! Enrichment request/response types.

use rulemine_core::errors::EnrichmentError;
use serde::{Deserialize, Serialize};

use crate::rules::{Rule, RuleType};

/// The classifier's verdict on one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAnalysis {
    pub rule_id: String,
    pub is_business_rule: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub rule_type: RuleType,
    #[serde(default)]
    pub domain_objects: Vec<String>,
    #[serde(default)]
    pub business_impact: String,
    /// In `[0, 1]`.
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResponse {
    pub analyses: Vec<RuleAnalysis>,
}

/// External rule classifier.
pub trait RuleEnricher: Send + Sync {
    fn enrich(&self, rules: &[Rule]) -> Result<EnrichmentResponse, EnrichmentError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub sent: usize,
    pub updated: usize,
    pub failed_batches: usize,
}
