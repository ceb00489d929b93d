//! Scanner data types.

use std::path::PathBuf;

use rulemine_core::errors::ScanError;
use rulemine_core::types::collections::BTreeMap;

use super::language_detect::SourceKind;

/// A C-family file selected for extraction.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute (root-joined) path used for reading.
    pub path: PathBuf,
    /// Root-relative, `/`-separated path; becomes the component id.
    pub relative: String,
    pub kind: SourceKind,
    pub file_size: u64,
}

/// Everything the walker learned about the project tree.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Selected sources in discovery order (sorted walk).
    pub files: Vec<SourceFile>,
    /// Root-relative paths of recognized build descriptor files.
    pub build_descriptors: Vec<String>,
    /// File names of well-known project configuration files.
    pub config_files: Vec<String>,
    /// Count of every non-ignored file by lower-cased extension (with dot).
    pub extension_counts: BTreeMap<String, usize>,
    /// Total non-ignored files seen.
    pub total_files: usize,
    /// Entries skipped by ignore rules.
    pub skipped_ignored: usize,
    /// Per-entry failures; never fatal.
    pub errors: Vec<ScanError>,
}
