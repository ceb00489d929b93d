//! Name-pattern analyzer: rule-like function names.

use rulemine_core::errors::AnalysisError;

use super::analyzer::RuleAnalyzer;
use super::types::{Confidence, Rule, RuleSource, RuleType};
use super::vocabulary::RuleVocabulary;
use crate::extraction::Component;

/// `validateOrder`, `checkLimit`, `DiscountPolicy`: `business_rule`, high.
pub struct NamePatternAnalyzer {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl NamePatternAnalyzer {
    pub fn new(vocabulary: &RuleVocabulary) -> Self {
        Self {
            prefixes: vocabulary.prefixes.clone(),
            suffixes: vocabulary.suffixes.clone(),
        }
    }

    pub fn is_rule_name(&self, name: &str) -> bool {
        let name = name.rsplit("::").next().unwrap_or(name).to_lowercase();
        self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
            || self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}

impl RuleAnalyzer for NamePatternAnalyzer {
    fn name(&self) -> &'static str {
        "name_pattern"
    }

    fn analyze(&self, component: &Component) -> Result<Vec<Rule>, AnalysisError> {
        Ok(component
            .functions
            .values()
            .filter(|f| self.is_rule_name(&f.name))
            .map(|f| Rule::new(f, RuleType::BusinessRule, Confidence::High, RuleSource::NamePattern))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_suffixes_match_case_insensitively() {
        let a = NamePatternAnalyzer::new(&RuleVocabulary::default());
        assert!(a.is_rule_name("validateFoo"));
        assert!(a.is_rule_name("CheckLimit"));
        assert!(a.is_rule_name("calcularImposto"));
        assert!(a.is_rule_name("DiscountPolicy"));
        assert!(a.is_rule_name("Order::verifyTotals"));
        assert!(a.is_rule_name("shippingrule"));
        assert!(!a.is_rule_name("render"));
        assert!(!a.is_rule_name("Validator::run"));
    }
}
