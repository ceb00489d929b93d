//! Source kind detection from file extension.

use std::path::Path;

use rulemine_core::constants::HEADER_EXTENSIONS;
use serde::{Deserialize, Serialize};

/// Whether a C-family file is a header or a translation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Header,
    Source,
}

impl SourceKind {
    /// Classify a recognized extension. Anything that is not a header
    /// extension is a source file.
    pub fn from_extension(ext: &str) -> SourceKind {
        let ext = ext.to_ascii_lowercase();
        if HEADER_EXTENSIONS.contains(&ext.as_str()) {
            SourceKind::Header
        } else {
            SourceKind::Source
        }
    }

    /// Classify a path whose extension is in `recognized`; `None` for
    /// anything else.
    pub fn from_path(path: &Path, recognized: &[String]) -> Option<SourceKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if recognized.iter().any(|r| *r == ext) {
            Some(Self::from_extension(&ext))
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Header => "header",
            SourceKind::Source => "source",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
