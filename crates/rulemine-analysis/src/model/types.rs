//! Project model types.

use rulemine_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use super::build_system::BuildSystem;
use crate::dependencies::IncludeReport;
use crate::extraction::Component;
use crate::scanner::LanguageReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub total_components: usize,
    pub total_classes: usize,
    pub total_functions: usize,
    pub total_templates: usize,
    pub total_operators: usize,
}

/// Structural model of one project. Built once per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectModel {
    pub components: Vec<Component>,
    /// Component id → ids it depends on.
    pub dependency_graph: BTreeMap<String, Vec<String>>,
    pub build_system: BuildSystem,
    pub metrics: ProjectMetrics,
    pub include_resolutions: Vec<IncludeReport>,
    pub language: LanguageReport,
}

impl ProjectModel {
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.path == id)
    }

    /// Plain nested map/list/string form for persistence.
    pub fn to_plain(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
