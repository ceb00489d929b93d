//! Ignore patterns for C and C++ trees.
//!
//! Build trees, IDE state, and object files are never analyzed. User rules
//! come from `.gitignore`, `.rulemineignore`, and `scan.extra_ignores`.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use rulemine_core::constants::IGNORE_FILE;

/// Default directories to always ignore.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    // IDE/Editor
    ".idea",
    ".vscode",
    ".vs",
    ".cache",
    ".clangd",
    "*.xcodeproj",
    "*.xcworkspace",
    // CMake and friends
    "CMakeFiles",
    "cmake-build-*",
    "_build",
    ".build",
    "build",
    "out",
    // MSBuild outputs
    "Debug",
    "Release",
    "x64",
    "ipch",
    // Package managers
    "vcpkg_installed",
    "conan",
    "node_modules",
    // Temp
    "tmp",
    ".tmp",
];

/// Binary and generated files.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    "*.o",
    "*.obj",
    "*.a",
    "*.lib",
    "*.so",
    "*.so.*",
    "*.dylib",
    "*.dll",
    "*.exe",
    "*.pdb",
    "*.ilk",
    "*.gch",
    "*.pch",
    "*.d",
    "*.moc",
    "moc_*.cpp",
    "qrc_*.cpp",
    "ui_*.h",
    "*.pb.h",
    "*.pb.cc",
];

/// Compiled ignore matcher rooted at the project root.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Defaults, then `extra_patterns`, then the project ignore files.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in DEFAULT_IGNORE_FILES {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %e, "skipping invalid ignore pattern");
            }
        }

        for name in [IGNORE_FILE, ".gitignore"] {
            let file = root.join(name);
            if file.exists() {
                if let Some(e) = builder.add(&file) {
                    tracing::warn!(path = %file.display(), error = %e, "partially loaded ignore file");
                }
            }
        }

        let gitignore = match builder.build() {
            Ok(gitignore) => gitignore,
            Err(e) => {
                tracing::warn!(error = %e, "ignore rules failed to compile, ignoring nothing");
                Gitignore::empty()
            }
        };

        Self { gitignore }
    }

    /// `relative` is the path under the root.
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(relative, is_dir).is_ignore()
    }
}
