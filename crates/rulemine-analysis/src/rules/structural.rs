//! Structural analyzer: error-handling and arithmetic tokens in bodies.

use rulemine_core::errors::AnalysisError;

use super::analyzer::RuleAnalyzer;
use super::types::{Confidence, Rule, RuleSource, RuleType};
use super::vocabulary::RuleVocabulary;
use crate::extraction::{Component, FunctionInfo};

/// At most one rule per function; validation wins over calculation.
pub struct StructuralAnalyzer {
    validation_indicators: Vec<String>,
    calculation_indicators: Vec<String>,
}

impl StructuralAnalyzer {
    pub fn new(vocabulary: &RuleVocabulary) -> Self {
        Self {
            validation_indicators: vocabulary.validation_indicators.clone(),
            calculation_indicators: vocabulary.calculation_indicators.clone(),
        }
    }

    fn classify(&self, function: &FunctionInfo) -> Option<Rule> {
        let content = function.body_text.to_lowercase();
        let contains_any = |tokens: &[String]| tokens.iter().any(|t| content.contains(t.as_str()));

        if contains_any(&self.validation_indicators) {
            Some(Rule::new(function, RuleType::ValidationRule, Confidence::Medium, RuleSource::ErrorHandling))
        } else if contains_any(&self.calculation_indicators) {
            Some(Rule::new(
                function,
                RuleType::CalculationRule,
                Confidence::Medium,
                RuleSource::CalculationPattern,
            ))
        } else {
            None
        }
    }
}

impl RuleAnalyzer for StructuralAnalyzer {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn analyze(&self, component: &Component) -> Result<Vec<Rule>, AnalysisError> {
        Ok(component.functions.values().filter_map(|f| self.classify(f)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(body: &str) -> FunctionInfo {
        FunctionInfo {
            name: "f".to_string(),
            return_type: "int".to_string(),
            declaration_line: 1,
            body_text: body.to_string(),
        }
    }

    #[test]
    fn validation_takes_precedence() {
        let a = StructuralAnalyzer::new(&RuleVocabulary::default());
        let rule = a.classify(&function("int f() { if (sum < 0) return false; }")).unwrap();
        assert_eq!(rule.rule_type, RuleType::ValidationRule);
        assert_eq!(rule.source, RuleSource::ErrorHandling);
    }

    #[test]
    fn calculation_tokens() {
        let a = StructuralAnalyzer::new(&RuleVocabulary::default());
        let rule = a.classify(&function("double f() { return Average(xs); }")).unwrap();
        assert_eq!(rule.rule_type, RuleType::CalculationRule);
        assert_eq!(rule.confidence, Confidence::Medium);
        assert!(a.classify(&function("void f() { draw(); }")).is_none());
    }

    #[test]
    fn throw_marks_validation() {
        let a = StructuralAnalyzer::new(&RuleVocabulary::default());
        let rule = a.classify(&function("void f() { THROW_IF(x); }")).unwrap();
        assert_eq!(rule.rule_type, RuleType::ValidationRule);
    }
}
