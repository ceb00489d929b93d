//! Rule data model.

use serde::{Deserialize, Serialize};

use crate::extraction::FunctionInfo;

/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn level(&self) -> u8 {
        match self {
            Confidence::Low => 1,
            Confidence::Medium => 2,
            Confidence::High => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    BusinessRule,
    ValidationRule,
    CalculationRule,
    DomainRule,
}

impl RuleType {
    pub fn name(&self) -> &'static str {
        match self {
            RuleType::BusinessRule => "business_rule",
            RuleType::ValidationRule => "validation_rule",
            RuleType::CalculationRule => "calculation_rule",
            RuleType::DomainRule => "domain_rule",
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which analyzer produced a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    NamePattern,
    ErrorHandling,
    CalculationPattern,
    DomainAnalysis,
}

impl RuleSource {
    pub fn name(&self) -> &'static str {
        match self {
            RuleSource::NamePattern => "name_pattern",
            RuleSource::ErrorHandling => "error_handling",
            RuleSource::CalculationPattern => "calculation_pattern",
            RuleSource::DomainAnalysis => "domain_analysis",
        }
    }
}

/// A candidate business rule attached to one function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// `{function_name}_{rule_type}`.
    pub id: String,
    pub function_name: String,
    pub return_type: String,
    /// Function body text.
    pub content: String,
    pub rule_type: RuleType,
    pub confidence: Confidence,
    pub source: RuleSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_attributes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_objects: Option<Vec<String>>,
}

impl Rule {
    pub fn new(
        function: &FunctionInfo,
        rule_type: RuleType,
        confidence: Confidence,
        source: RuleSource,
    ) -> Self {
        Self {
            id: rule_id(&function.name, rule_type),
            function_name: function.name.clone(),
            return_type: function.return_type.clone(),
            content: function.body_text.clone(),
            rule_type,
            confidence,
            source,
            domain: None,
            domain_attributes: None,
            dependencies: None,
            business_impact: None,
            description: None,
            confidence_score: None,
            domain_objects: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>, attributes: Vec<String>) -> Self {
        self.domain = Some(domain.into());
        self.domain_attributes = Some(attributes);
        self
    }
}

pub fn rule_id(function_name: &str, rule_type: RuleType) -> String {
    format!("{}_{}", function_name, rule_type.name())
}
