//! Include resolution outcomes.

use serde::{Deserialize, Serialize};

/// What a single `#include` target resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "targets", rename_all = "snake_case")]
pub enum IncludeResolution {
    Resolved(String),
    /// More than one in-project file shares the stem; discovery order.
    Ambiguous(Vec<String>),
    Unresolved,
}

impl IncludeResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, IncludeResolution::Resolved(_))
    }
}

/// One include of one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeReport {
    pub component: String,
    pub include: String,
    pub resolution: IncludeResolution,
}
