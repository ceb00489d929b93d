//! Business rule candidates: three analyzers and per-function fusion.

pub mod analyzer;
pub mod domain_correlation;
pub mod fusion;
pub mod name_pattern;
pub mod structural;
pub mod types;
pub mod vocabulary;

pub use analyzer::{Analyzer, AnalyzerSet, RuleAnalyzer};
pub use domain_correlation::DomainCorrelationAnalyzer;
pub use fusion::merge;
pub use name_pattern::NamePatternAnalyzer;
pub use structural::StructuralAnalyzer;
pub use types::{Confidence, Rule, RuleSource, RuleType};
pub use vocabulary::RuleVocabulary;
