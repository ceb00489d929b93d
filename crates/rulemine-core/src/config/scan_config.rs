//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_THREADS, HEADER_EXTENSIONS, SOURCE_EXTENSIONS,
};

/// Configuration for source discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Default: 1MB.
    pub max_file_size: Option<u64>,
    /// Worker threads for extraction and analysis. Default: 0 (auto).
    pub threads: Option<usize>,
    /// Follow symlinked directories. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Extensions (without dot) treated as C-family source or header files.
    /// Empty means the built-in list.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Additional gitignore-style patterns to skip.
    #[serde(default)]
    pub extra_ignores: Vec<String>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns the effective thread count, 0 meaning auto.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    /// Returns whether symlinked directories are followed.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    /// Returns the lower-cased recognized extensions.
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            SOURCE_EXTENSIONS
                .iter()
                .chain(HEADER_EXTENSIONS.iter())
                .map(|e| e.to_string())
                .collect()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect()
        }
    }
}
