//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::RuleMineEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// The dispatcher is itself a handler, so it can be passed wherever a single
/// `&dyn RuleMineEventHandler` is expected.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RuleMineEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn RuleMineEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from running.
    fn emit<F: Fn(&dyn RuleMineEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }
}

impl RuleMineEventHandler for EventDispatcher {
    fn on_scan_started(&self, event: &ScanStartedEvent) {
        self.emit(|h| h.on_scan_started(event));
    }

    fn on_file_extracted(&self, event: &FileExtractedEvent) {
        self.emit(|h| h.on_file_extracted(event));
    }

    fn on_file_error(&self, event: &FileErrorEvent) {
        self.emit(|h| h.on_file_error(event));
    }

    fn on_scan_complete(&self, event: &ScanCompleteEvent) {
        self.emit(|h| h.on_scan_complete(event));
    }

    fn on_domains_discovered(&self, event: &DomainsDiscoveredEvent) {
        self.emit(|h| h.on_domains_discovered(event));
    }

    fn on_rules_fused(&self, event: &RulesFusedEvent) {
        self.emit(|h| h.on_rules_fused(event));
    }

    fn on_enrichment_failed(&self, event: &EnrichmentFailedEvent) {
        self.emit(|h| h.on_enrichment_failed(event));
    }
}
