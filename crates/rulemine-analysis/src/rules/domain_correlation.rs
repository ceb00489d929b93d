//! Domain-correlation analyzer: functions touching discovered domains.

use std::sync::Arc;

use rulemine_core::errors::AnalysisError;

use super::analyzer::RuleAnalyzer;
use super::types::{Confidence, Rule, RuleSource, RuleType};
use crate::domain::{DomainCandidates, DomainDiscovery};
use crate::extraction::Component;

/// Emits a `domain_rule` for every (function, domain) pair where the body
/// mentions the domain and at least one of its attributes.
///
/// Must be prepared with discovered domains before `analyze`; an unprepared
/// analyzer fails with `AnalysisError::DomainsNotPrepared`.
#[derive(Default)]
pub struct DomainCorrelationAnalyzer {
    domains: Option<Arc<DomainCandidates>>,
}

impl DomainCorrelationAnalyzer {
    /// Unprepared.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(domains: Arc<DomainCandidates>) -> Self {
        Self { domains: Some(domains) }
    }

    /// Run discovery over the full component set and keep the result.
    pub fn prepare(&mut self, discovery: &DomainDiscovery, components: &[Component]) {
        self.domains = Some(Arc::new(discovery.discover(components)));
    }

    pub fn is_prepared(&self) -> bool {
        self.domains.is_some()
    }

    pub fn domains(&self) -> Option<&DomainCandidates> {
        self.domains.as_deref()
    }
}

impl RuleAnalyzer for DomainCorrelationAnalyzer {
    fn name(&self) -> &'static str {
        "domain_correlation"
    }

    fn analyze(&self, component: &Component) -> Result<Vec<Rule>, AnalysisError> {
        let domains = self.domains.as_ref().ok_or_else(|| AnalysisError::DomainsNotPrepared {
            component: component.path.clone(),
        })?;

        let mut rules = Vec::new();
        for function in component.functions.values() {
            let content = function.body_text.to_lowercase();
            for (domain, attributes) in domains.iter() {
                if !content.contains(&domain.to_lowercase()) {
                    continue;
                }
                let matched: Vec<String> = attributes
                    .iter()
                    .filter(|attr| content.contains(&attr.to_lowercase()))
                    .cloned()
                    .collect();
                if matched.is_empty() {
                    continue;
                }
                rules.push(
                    Rule::new(function, RuleType::DomainRule, Confidence::Medium, RuleSource::DomainAnalysis)
                        .with_domain(domain.clone(), matched),
                );
            }
        }
        Ok(rules)
    }
}
