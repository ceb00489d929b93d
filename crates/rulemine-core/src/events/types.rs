//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_scan_started`. Emitted before the walk, so the file
/// count is not known yet.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub root: PathBuf,
    pub file_count: Option<usize>,
}

/// Payload for `on_file_extracted`.
#[derive(Debug, Clone)]
pub struct FileExtractedEvent {
    pub path: String,
    pub functions: usize,
    pub classes: usize,
}

/// Payload for `on_file_error`. The file is omitted from the model.
#[derive(Debug, Clone)]
pub struct FileErrorEvent {
    pub path: PathBuf,
    pub message: String,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub files_discovered: usize,
    pub components: usize,
    pub failed_files: usize,
    pub duration_ms: u64,
}

/// Payload for `on_domains_discovered`.
#[derive(Debug, Clone)]
pub struct DomainsDiscoveredEvent {
    pub domains: Vec<String>,
}

/// Payload for `on_rules_fused`.
#[derive(Debug, Clone)]
pub struct RulesFusedEvent {
    pub component: String,
    pub candidates: usize,
    pub rules: usize,
}

/// Payload for `on_enrichment_failed`.
#[derive(Debug, Clone)]
pub struct EnrichmentFailedEvent {
    pub batch_size: usize,
    pub message: String,
}
