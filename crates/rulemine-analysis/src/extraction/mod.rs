//! Component extraction: regex-driven structural facts per file.
//!
//! Not a C++ front-end: patterns are applied to raw text, bodies are cut by
//! brace counting, and unmatched constructs are simply omitted.

pub mod body;
pub mod extractor;
pub mod patterns;
pub mod types;

pub use body::{extract_body, LineIndex};
pub use extractor::ComponentExtractor;
pub use patterns::ExtractionPatterns;
pub use types::{ClassInfo, Component, FunctionInfo, OperatorInfo, TemplateInfo, TemplateKind};
