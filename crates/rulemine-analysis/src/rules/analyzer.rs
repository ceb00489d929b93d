//! Analyzer capability and the fixed analyzer set.

use std::sync::Arc;

use rulemine_core::errors::AnalysisError;

use super::domain_correlation::DomainCorrelationAnalyzer;
use super::fusion;
use super::name_pattern::NamePatternAnalyzer;
use super::structural::StructuralAnalyzer;
use super::types::Rule;
use super::vocabulary::RuleVocabulary;
use crate::domain::DomainCandidates;
use crate::extraction::Component;

/// Produces rule candidates for one component.
pub trait RuleAnalyzer: Send + Sync {
    fn name(&self) -> &'static str;

    fn analyze(&self, component: &Component) -> Result<Vec<Rule>, AnalysisError>;
}

/// The closed set of analyzer strategies.
pub enum Analyzer {
    NamePattern(NamePatternAnalyzer),
    Structural(StructuralAnalyzer),
    DomainCorrelation(DomainCorrelationAnalyzer),
}

impl RuleAnalyzer for Analyzer {
    fn name(&self) -> &'static str {
        match self {
            Analyzer::NamePattern(a) => a.name(),
            Analyzer::Structural(a) => a.name(),
            Analyzer::DomainCorrelation(a) => a.name(),
        }
    }

    fn analyze(&self, component: &Component) -> Result<Vec<Rule>, AnalysisError> {
        match self {
            Analyzer::NamePattern(a) => a.analyze(component),
            Analyzer::Structural(a) => a.analyze(component),
            Analyzer::DomainCorrelation(a) => a.analyze(component),
        }
    }
}

/// Name-pattern, structural, then domain-correlation, always in that order.
pub struct AnalyzerSet {
    analyzers: [Analyzer; 3],
}

impl AnalyzerSet {
    pub fn new(vocabulary: &RuleVocabulary, domains: Arc<DomainCandidates>) -> Self {
        Self::from_domain_analyzer(vocabulary, DomainCorrelationAnalyzer::with_domains(domains))
    }

    pub fn from_domain_analyzer(vocabulary: &RuleVocabulary, domain: DomainCorrelationAnalyzer) -> Self {
        Self {
            analyzers: [
                Analyzer::NamePattern(NamePatternAnalyzer::new(vocabulary)),
                Analyzer::Structural(StructuralAnalyzer::new(vocabulary)),
                Analyzer::DomainCorrelation(domain),
            ],
        }
    }

    pub fn analyzers(&self) -> &[Analyzer] {
        &self.analyzers
    }

    /// Unfused candidates from every analyzer, in analyzer order.
    pub fn candidates(&self, component: &Component) -> Result<Vec<Rule>, AnalysisError> {
        let mut candidates = Vec::new();
        for analyzer in &self.analyzers {
            let found = analyzer.analyze(component)?;
            tracing::trace!(
                analyzer = analyzer.name(),
                component = %component.path,
                candidates = found.len(),
                "analyzer finished"
            );
            candidates.extend(found);
        }
        Ok(candidates)
    }

    /// Candidates fused to one rule per function.
    pub fn analyze_component(&self, component: &Component) -> Result<Vec<Rule>, AnalysisError> {
        Ok(fusion::merge(self.candidates(component)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::FunctionInfo;
    use crate::rules::{Confidence, RuleSource, RuleType};
    use crate::scanner::SourceKind;

    fn component_with(name: &str, body: &str) -> Component {
        let mut c = Component::new("foo.cpp", SourceKind::Source);
        c.functions.insert(
            name.to_string(),
            FunctionInfo {
                name: name.to_string(),
                return_type: "bool".to_string(),
                declaration_line: 1,
                body_text: body.to_string(),
            },
        );
        c
    }

    #[test]
    fn validate_function_fuses_to_high_name_pattern() {
        let set = AnalyzerSet::new(&RuleVocabulary::default(), Arc::new(DomainCandidates::default()));
        let c = component_with("validateFoo", "bool validateFoo(int x) { if (x < 0) return false; return true; }");

        let candidates = set.candidates(&c).unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates
            .iter()
            .any(|r| r.rule_type == RuleType::ValidationRule && r.confidence == Confidence::Medium));

        let rules = set.analyze_component(&c).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].confidence, Confidence::High);
        assert_eq!(rules[0].source, RuleSource::NamePattern);
        assert_eq!(rules[0].id, "validateFoo_business_rule");
    }

    #[test]
    fn unprepared_domain_analyzer_propagates() {
        let set = AnalyzerSet::from_domain_analyzer(&RuleVocabulary::default(), DomainCorrelationAnalyzer::new());
        let err = set.analyze_component(&component_with("f", "void f() {}")).unwrap_err();
        assert!(matches!(err, AnalysisError::DomainsNotPrepared { .. }));
    }

    #[test]
    fn fixed_order() {
        let set = AnalyzerSet::new(&RuleVocabulary::default(), Arc::new(DomainCandidates::default()));
        let names: Vec<_> = set.analyzers().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["name_pattern", "structural", "domain_correlation"]);
    }
}
