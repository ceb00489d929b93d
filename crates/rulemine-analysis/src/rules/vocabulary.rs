//! Token vocabularies for the name-pattern and structural analyzers.

use rulemine_core::config::AnalysisConfig;
use rulemine_core::errors::AnalysisError;

/// All entries are stored lower-cased; matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVocabulary {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub validation_indicators: Vec<String>,
    pub calculation_indicators: Vec<String>,
}

impl Default for RuleVocabulary {
    fn default() -> Self {
        let config = AnalysisConfig::default();
        Self {
            prefixes: lower(config.effective_rule_prefixes()),
            suffixes: lower(config.effective_rule_suffixes()),
            validation_indicators: lower(config.effective_validation_indicators()),
            calculation_indicators: lower(config.effective_calculation_indicators()),
        }
    }
}

impl RuleVocabulary {
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let vocabulary = Self {
            prefixes: lower(config.effective_rule_prefixes()),
            suffixes: lower(config.effective_rule_suffixes()),
            validation_indicators: lower(config.effective_validation_indicators()),
            calculation_indicators: lower(config.effective_calculation_indicators()),
        };
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        let fields = [
            ("rule_prefixes", &self.prefixes),
            ("rule_suffixes", &self.suffixes),
            ("validation_indicators", &self.validation_indicators),
            ("calculation_indicators", &self.calculation_indicators),
        ];
        for (field, entries) in fields {
            if entries.iter().any(|e| e.trim().is_empty()) {
                return Err(AnalysisError::InvalidVocabulary {
                    field: field.to_string(),
                    message: "empty entry".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn lower(entries: Vec<String>) -> Vec<String> {
    entries.into_iter().map(|e| e.to_lowercase()).collect()
}
