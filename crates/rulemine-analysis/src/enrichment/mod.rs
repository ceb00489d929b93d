//! Enrichment contract: hand uncertain rules to an external classifier and
//! fold its verdicts back in.
//!
//! The classifier itself lives outside this crate behind `RuleEnricher`.

pub mod merge;
pub mod types;

use rulemine_core::config::EnrichmentConfig;
use rulemine_core::events::types::EnrichmentFailedEvent;
use rulemine_core::events::RuleMineEventHandler;

pub use merge::{apply_enrichment, uncertain_rules};
pub use types::{EnrichmentResponse, EnrichmentSummary, RuleAnalysis, RuleEnricher};

use crate::rules::Rule;

/// Send every uncertain rule to `enricher`, in batches when configured,
/// and apply the returned analyses.
///
/// A failed batch is logged, reported through `events`, and left
/// unenriched; the remaining batches still run.
pub fn enrich_rules(
    rules: &mut [Rule],
    enricher: &dyn RuleEnricher,
    config: &EnrichmentConfig,
    events: &dyn RuleMineEventHandler,
) -> EnrichmentSummary {
    let threshold = config.effective_high_confidence_threshold();
    let uncertain = uncertain_rules(rules);
    let mut summary = EnrichmentSummary {
        sent: uncertain.len(),
        ..EnrichmentSummary::default()
    };
    if uncertain.is_empty() {
        return summary;
    }

    let batch_size = config.effective_batch_size().unwrap_or(uncertain.len());
    for batch in uncertain.chunks(batch_size) {
        match enricher.enrich(batch) {
            Ok(response) => {
                summary.updated += apply_enrichment(rules, &response.analyses, threshold);
            }
            Err(e) => {
                tracing::warn!(batch_size = batch.len(), error = %e, "enrichment batch failed");
                events.on_enrichment_failed(&EnrichmentFailedEvent {
                    batch_size: batch.len(),
                    message: e.to_string(),
                });
                summary.failed_batches += 1;
            }
        }
    }

    tracing::info!(
        sent = summary.sent,
        updated = summary.updated,
        failed_batches = summary.failed_batches,
        "enrichment complete"
    );
    summary
}
