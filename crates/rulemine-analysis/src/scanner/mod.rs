//! Scanner subsystem: source discovery, ignore handling, language detection.
//!
//! The scanner is the entry point of the pipeline. It walks the project root,
//! keeps C-family sources and headers, records build descriptors, and
//! tallies extensions for the project language report.

pub mod ignores;
pub mod language_detect;
pub mod project_language;
pub mod types;
pub mod walker;

pub use ignores::IgnorePatterns;
pub use language_detect::SourceKind;
pub use project_language::LanguageReport;
pub use types::{SourceFile, WalkOutcome};
pub use walker::SourceWalker;
