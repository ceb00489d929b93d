//! Enrichment configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HIGH_CONFIDENCE_THRESHOLD;

/// Configuration for merging enrichment responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Score above which a confirmed rule becomes `high`. Default: 0.7.
    pub high_confidence_threshold: Option<f64>,
    /// Maximum rules per collaborator request. Default: unbounded.
    pub batch_size: Option<usize>,
}

impl EnrichmentConfig {
    /// Returns the effective promotion threshold, defaulting to 0.7.
    pub fn effective_high_confidence_threshold(&self) -> f64 {
        self.high_confidence_threshold
            .unwrap_or(DEFAULT_HIGH_CONFIDENCE_THRESHOLD)
    }

    /// Returns the effective batch size; `None` sends every uncertain rule at once.
    pub fn effective_batch_size(&self) -> Option<usize> {
        self.batch_size.filter(|n| *n > 0)
    }
}
