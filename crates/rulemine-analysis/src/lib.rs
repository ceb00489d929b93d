//! rulemine-analysis: structural and business-rule analysis of C and C++
//! source trees.
//!
//! Phases, in pipeline order:
//! - `scanner`: sorted walk, ignore rules, language report
//! - `extraction`: per-file components (includes, classes, functions with bodies)
//! - `dependencies`: stem-based include resolution
//! - `model`: project model, metrics, build system
//! - `domain`: domain candidate discovery
//! - `rules`: three analyzers and per-function fusion
//! - `enrichment` / `index`: contracts with external collaborators
//! - `pipeline`: orchestration over a rayon pool

pub mod dependencies;
pub mod domain;
pub mod enrichment;
pub mod extraction;
pub mod index;
pub mod model;
pub mod pipeline;
pub mod rules;
pub mod scanner;

pub use pipeline::{AnalysisOutput, AnalysisPipeline};
