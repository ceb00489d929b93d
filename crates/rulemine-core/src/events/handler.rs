//! RuleMineEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing pipeline progress.
///
/// Handlers only override the events they care about. `Send + Sync` is
/// required because extraction runs on worker threads.
pub trait RuleMineEventHandler: Send + Sync {
    // ---- Scan Lifecycle ----
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_file_extracted(&self, _event: &FileExtractedEvent) {}
    fn on_file_error(&self, _event: &FileErrorEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}

    // ---- Rules ----
    fn on_domains_discovered(&self, _event: &DomainsDiscoveredEvent) {}
    fn on_rules_fused(&self, _event: &RulesFusedEvent) {}

    // ---- Enrichment ----
    fn on_enrichment_failed(&self, _event: &EnrichmentFailedEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl RuleMineEventHandler for NoOpHandler {}
