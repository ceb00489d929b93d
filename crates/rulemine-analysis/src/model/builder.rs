//! Pure aggregation of resolved components into a `ProjectModel`.

use super::build_system::BuildSystem;
use super::types::{ProjectMetrics, ProjectModel};
use crate::dependencies::IncludeReport;
use crate::extraction::Component;
use crate::scanner::LanguageReport;

#[derive(Debug, Default)]
pub struct ProjectModelBuilder {
    build_descriptors: Vec<String>,
    include_resolutions: Vec<IncludeReport>,
    language: LanguageReport,
}

impl ProjectModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build_descriptors(mut self, descriptors: Vec<String>) -> Self {
        self.build_descriptors = descriptors;
        self
    }

    pub fn with_include_resolutions(mut self, reports: Vec<IncludeReport>) -> Self {
        self.include_resolutions = reports;
        self
    }

    pub fn with_language(mut self, language: LanguageReport) -> Self {
        self.language = language;
        self
    }

    /// Never fails, including on an empty component list.
    pub fn build(self, components: Vec<Component>) -> ProjectModel {
        let mut metrics = ProjectMetrics {
            total_components: components.len(),
            ..ProjectMetrics::default()
        };
        for c in &components {
            metrics.total_classes += c.classes.len();
            metrics.total_functions += c.functions.len();
            metrics.total_templates += c.templates.len();
            metrics.total_operators += c.operators.len();
        }

        let dependency_graph = components
            .iter()
            .map(|c| (c.path.clone(), c.dependencies.iter().cloned().collect()))
            .collect();

        let build_system = BuildSystem::detect(&self.build_descriptors);

        tracing::debug!(
            components = metrics.total_components,
            functions = metrics.total_functions,
            build_system = %build_system,
            "project model built"
        );

        ProjectModel {
            components,
            dependency_graph,
            build_system,
            metrics,
            include_resolutions: self.include_resolutions,
            language: self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{ClassInfo, FunctionInfo};
    use crate::scanner::SourceKind;

    #[test]
    fn empty_project() {
        let model = ProjectModelBuilder::new().build(Vec::new());
        assert_eq!(model.metrics, ProjectMetrics::default());
        assert_eq!(model.build_system, BuildSystem::Unknown);
        assert!(model.dependency_graph.is_empty());
    }

    #[test]
    fn metrics_and_graph() {
        let mut a = Component::new("a.cpp", SourceKind::Source);
        a.dependencies.insert("a.h".to_string());
        a.functions.insert(
            "f".to_string(),
            FunctionInfo {
                name: "f".to_string(),
                return_type: "int".to_string(),
                declaration_line: 1,
                body_text: "int f() {}".to_string(),
            },
        );
        let mut h = Component::new("a.h", SourceKind::Header);
        h.classes.push(ClassInfo {
            name: "A".to_string(),
            base_class: None,
            declaration_line: 1,
        });

        let model = ProjectModelBuilder::new()
            .with_build_descriptors(vec!["CMakeLists.txt".to_string()])
            .build(vec![a, h]);

        assert_eq!(model.metrics.total_components, 2);
        assert_eq!(model.metrics.total_functions, 1);
        assert_eq!(model.metrics.total_classes, 1);
        assert_eq!(model.dependency_graph["a.cpp"], vec!["a.h".to_string()]);
        assert!(model.dependency_graph["a.h"].is_empty());
        assert_eq!(model.build_system, BuildSystem::Cmake);
    }

    #[test]
    fn plain_form_uses_lists_and_strings() {
        let mut a = Component::new("a.cpp", SourceKind::Source);
        a.includes.insert("a.h".to_string());
        let model = ProjectModelBuilder::new().build(vec![a]);

        let plain = model.to_plain().unwrap();
        assert_eq!(plain["build_system"], "unknown");
        assert_eq!(plain["components"][0]["path"], "a.cpp");
        assert_eq!(plain["components"][0]["kind"], "source");
        assert_eq!(plain["components"][0]["includes"][0], "a.h");
        assert_eq!(plain["metrics"]["total_components"], 1);
    }
}
