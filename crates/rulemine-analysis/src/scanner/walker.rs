//! Sorted recursive walker.
//!
//! Entries are visited in file-name order, so component discovery order
//! (and therefore include resolution) is stable across runs.

use std::fs;
use std::path::{Path, PathBuf};

use rulemine_core::config::ScanConfig;
use rulemine_core::errors::ScanError;
use rulemine_core::traits::Cancellable;
use rulemine_core::types::collections::FxHashSet;

use super::ignores::IgnorePatterns;
use super::language_detect::SourceKind;
use super::project_language::CONFIG_FILES;
use super::types::{SourceFile, WalkOutcome};
use crate::model::BuildSystem;

/// Walks a project root and selects C-family sources.
pub struct SourceWalker {
    root: PathBuf,
    ignores: IgnorePatterns,
    extensions: Vec<String>,
    max_file_size: u64,
    follow_symlinks: bool,
}

impl SourceWalker {
    pub fn new(root: &Path, config: &ScanConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            ignores: IgnorePatterns::new(root, &config.extra_ignores),
            extensions: config.effective_extensions(),
            max_file_size: config.effective_max_file_size(),
            follow_symlinks: config.effective_follow_symlinks(),
        }
    }

    /// Walk the tree. Fails only when the root is missing or the walk is
    /// cancelled; per-entry failures land in `WalkOutcome::errors`.
    pub fn walk(&self, cancel: &dyn Cancellable) -> Result<WalkOutcome, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: self.root.clone(),
            });
        }

        let mut outcome = WalkOutcome::default();
        let mut visited = FxHashSet::default();
        if let Ok(canonical) = fs::canonicalize(&self.root) {
            visited.insert(canonical);
        }
        self.walk_dir(&self.root, &mut outcome, &mut visited, cancel)?;

        tracing::debug!(
            root = %self.root.display(),
            sources = outcome.files.len(),
            total_files = outcome.total_files,
            ignored = outcome.skipped_ignored,
            errors = outcome.errors.len(),
            "walk complete"
        );
        Ok(outcome)
    }

    fn walk_dir(
        &self,
        dir: &Path,
        outcome: &mut WalkOutcome,
        visited: &mut FxHashSet<PathBuf>,
        cancel: &dyn Cancellable,
    ) -> Result<(), ScanError> {
        if cancel.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                outcome.errors.push(ScanError::IoError {
                    path: dir.to_path_buf(),
                    source,
                });
                return Ok(());
            }
        };
        let mut entries: Vec<_> = entries.flatten().collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path).to_path_buf();

            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(source) => {
                    outcome.errors.push(ScanError::IoError { path, source });
                    continue;
                }
            };

            let (is_dir, is_file) = if file_type.is_symlink() {
                if !self.follow_symlinks {
                    continue;
                }
                match fs::metadata(&path) {
                    Ok(meta) => (meta.is_dir(), meta.is_file()),
                    Err(source) => {
                        outcome.errors.push(ScanError::IoError { path, source });
                        continue;
                    }
                }
            } else {
                (file_type.is_dir(), file_type.is_file())
            };

            if is_dir {
                if self.ignores.is_ignored(&relative, true) {
                    outcome.skipped_ignored += 1;
                    continue;
                }
                // Symlink cycles.
                if let Ok(canonical) = fs::canonicalize(&path) {
                    if !visited.insert(canonical) {
                        continue;
                    }
                }
                self.walk_dir(&path, outcome, visited, cancel)?;
            } else if is_file {
                if self.ignores.is_ignored(&relative, false) {
                    outcome.skipped_ignored += 1;
                    continue;
                }
                self.visit_file(path, &relative, outcome);
            }
        }
        Ok(())
    }

    fn visit_file(&self, path: PathBuf, relative: &Path, outcome: &mut WalkOutcome) {
        let relative_id = to_relative_id(relative);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(ext) = path.extension() {
            let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
            *outcome.extension_counts.entry(ext).or_insert(0) += 1;
            outcome.total_files += 1;
        }
        if CONFIG_FILES.contains(&file_name.as_str()) {
            outcome.config_files.push(file_name.clone());
        }
        if BuildSystem::from_file_name(&file_name).is_some() {
            outcome.build_descriptors.push(relative_id.clone());
        }

        let Some(kind) = SourceKind::from_path(&path, &self.extensions) else {
            return;
        };

        let file_size = match fs::metadata(&path) {
            Ok(meta) => meta.len(),
            Err(source) => {
                outcome.errors.push(ScanError::IoError { path, source });
                return;
            }
        };
        if file_size > self.max_file_size {
            outcome.errors.push(ScanError::MaxFileSizeExceeded {
                path,
                size: file_size,
                max: self.max_file_size,
            });
            return;
        }

        outcome.files.push(SourceFile {
            path,
            relative: relative_id,
            kind,
            file_size,
        });
    }
}

/// Root-relative path with `/` separators.
pub fn to_relative_id(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
