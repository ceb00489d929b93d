//! Analysis configuration: rule vocabularies, domain discovery, include policy.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALCULATION_INDICATORS, DEFAULT_GENERIC_TYPE_NAMES, DEFAULT_MIN_DOMAIN_ATTRIBUTES,
    DEFAULT_RULE_PREFIXES, DEFAULT_RULE_SUFFIXES, DEFAULT_VALIDATION_INDICATORS,
};

/// What to do with an include whose stem matches several components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguousIncludePolicy {
    /// Link the first candidate in discovery order.
    #[default]
    FirstMatch,
    /// Leave the include unlinked.
    Skip,
}

/// Configuration for the analysis subsystem.
///
/// Empty vocabularies fall back to the built-in lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Function-name prefixes marking a business rule.
    pub rule_prefixes: Vec<String>,
    /// Function-name suffixes marking a business rule.
    pub rule_suffixes: Vec<String>,
    /// Body tokens signalling validation.
    pub validation_indicators: Vec<String>,
    /// Body tokens signalling computation.
    pub calculation_indicators: Vec<String>,
    /// Names never treated as domain concepts or attributes.
    pub generic_type_names: Vec<String>,
    /// Minimum attributes for a domain to survive pruning. Default and floor: 2.
    pub min_domain_attributes: Option<usize>,
    /// Also harvest parameter types of `const T&` parameters. Default: false.
    pub discover_parameter_types: Option<bool>,
    /// Policy for includes with several candidate components.
    pub ambiguous_includes: Option<AmbiguousIncludePolicy>,
}

fn or_default(values: &[String], defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        values.to_vec()
    }
}

impl AnalysisConfig {
    pub fn effective_rule_prefixes(&self) -> Vec<String> {
        or_default(&self.rule_prefixes, DEFAULT_RULE_PREFIXES)
    }

    pub fn effective_rule_suffixes(&self) -> Vec<String> {
        or_default(&self.rule_suffixes, DEFAULT_RULE_SUFFIXES)
    }

    pub fn effective_validation_indicators(&self) -> Vec<String> {
        or_default(&self.validation_indicators, DEFAULT_VALIDATION_INDICATORS)
    }

    pub fn effective_calculation_indicators(&self) -> Vec<String> {
        or_default(&self.calculation_indicators, DEFAULT_CALCULATION_INDICATORS)
    }

    pub fn effective_generic_type_names(&self) -> Vec<String> {
        or_default(&self.generic_type_names, DEFAULT_GENERIC_TYPE_NAMES)
    }

    /// Returns the effective minimum domain attribute count, defaulting to 2.
    /// A configured value can raise the floor but never lower it.
    pub fn effective_min_domain_attributes(&self) -> usize {
        self.min_domain_attributes
            .unwrap_or(DEFAULT_MIN_DOMAIN_ATTRIBUTES)
            .max(DEFAULT_MIN_DOMAIN_ATTRIBUTES)
    }

    pub fn effective_discover_parameter_types(&self) -> bool {
        self.discover_parameter_types.unwrap_or(false)
    }

    pub fn effective_ambiguous_includes(&self) -> AmbiguousIncludePolicy {
        self.ambiguous_includes.unwrap_or_default()
    }
}
