//! Rule → index record conversion.

use rulemine_core::constants::RECORD_ID_HEX_LEN;
use serde::{Deserialize, Serialize};

use crate::rules::Rule;

/// Primitive-only metadata plus the text to embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub record_id: String,
    pub rule_id: String,
    pub function_name: String,
    pub rule_type: String,
    pub confidence: String,
    pub confidence_score: f64,
    /// JSON-encoded list.
    pub dependencies: String,
    /// JSON-encoded list.
    pub domain_objects: String,
    pub business_impact: String,
    pub description: String,
    pub document: String,
}

impl IndexRecord {
    pub fn from_rule(rule: &Rule) -> Result<Self, serde_json::Error> {
        let empty: Vec<String> = Vec::new();
        let description = rule.description.clone().unwrap_or_default();
        let business_impact = rule.business_impact.clone().unwrap_or_default();

        let document = [
            format!("Function: {}", rule.function_name),
            format!("Description: {}", description),
            format!("Type: {}", rule.rule_type),
            format!("Business Impact: {}", business_impact),
            "Code:".to_string(),
            rule.content.clone(),
        ]
        .join("\n");

        Ok(Self {
            record_id: record_id(&rule.id, &rule.content),
            rule_id: rule.id.clone(),
            function_name: rule.function_name.clone(),
            rule_type: rule.rule_type.name().to_string(),
            confidence: rule.confidence.name().to_string(),
            confidence_score: rule.confidence_score.unwrap_or(0.0),
            dependencies: serde_json::to_string(rule.dependencies.as_ref().unwrap_or(&empty))?,
            domain_objects: serde_json::to_string(rule.domain_objects.as_ref().unwrap_or(&empty))?,
            business_impact,
            description,
            document,
        })
    }
}

/// First 32 hex chars of BLAKE3 over `"{rule_id}_{content}"`.
pub fn record_id(rule_id: &str, content: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(rule_id.as_bytes());
    hasher.update(b"_");
    hasher.update(content.as_bytes());
    let hex = hasher.finalize().to_hex();
    hex[..RECORD_ID_HEX_LEN].to_string()
}
