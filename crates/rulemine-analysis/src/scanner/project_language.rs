//! Project-level language report.
//!
//! Scores the extension histogram of the walked tree. Only C++ is scored;
//! anything below the confidence cut-off is reported as `unknown`.

use std::path::Path;

use rulemine_core::config::ScanConfig;
use rulemine_core::errors::ScanError;
use rulemine_core::traits::CancellationToken;
use rulemine_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use super::types::WalkOutcome;
use super::walker::SourceWalker;

/// Per-extension weight toward the C++ score.
pub const EXTENSION_WEIGHTS: &[(&str, f64)] = &[
    (".cpp", 1.0),
    (".hpp", 0.8),
    (".h", 0.6),
    (".cc", 1.0),
    (".cxx", 1.0),
    (".hxx", 0.8),
];

/// Well-known C++ project files reported alongside the score.
pub const CONFIG_FILES: &[&str] = &["CMakeLists.txt", "Makefile", ".clang-format"];

const CPP_CONFIDENCE_CUTOFF: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageReport {
    /// `cpp` or `unknown`.
    pub language: String,
    pub confidence: f64,
    pub detected_files: BTreeMap<String, usize>,
    pub main_files: Vec<String>,
}

impl Default for LanguageReport {
    fn default() -> Self {
        Self {
            language: "unknown".to_string(),
            confidence: 0.0,
            detected_files: BTreeMap::new(),
            main_files: Vec::new(),
        }
    }
}

impl LanguageReport {
    pub fn from_counts(detected_files: BTreeMap<String, usize>, main_files: Vec<String>) -> Self {
        let total: usize = detected_files.values().sum();
        let score: f64 = detected_files
            .iter()
            .filter_map(|(ext, count)| {
                EXTENSION_WEIGHTS
                    .iter()
                    .find(|(e, _)| e == ext)
                    .map(|(_, weight)| *count as f64 * weight)
            })
            .sum();
        let confidence = if total > 0 { score / total as f64 } else { 0.0 };
        let language = if confidence > CPP_CONFIDENCE_CUTOFF {
            "cpp"
        } else {
            "unknown"
        };

        Self {
            language: language.to_string(),
            confidence,
            detected_files,
            main_files,
        }
    }

    pub fn from_walk(outcome: &WalkOutcome) -> Self {
        Self::from_counts(outcome.extension_counts.clone(), outcome.config_files.clone())
    }

    /// Walk `root` with default scan settings and score it.
    pub fn detect(root: &Path) -> Result<Self, ScanError> {
        let walker = SourceWalker::new(root, &ScanConfig::default());
        let outcome = walker.walk(&CancellationToken::new())?;
        Ok(Self::from_walk(&outcome))
    }

    pub fn is_cpp(&self) -> bool {
        self.language == "cpp"
    }
}
