//! Folding classifier verdicts into rules.

use rulemine_core::types::collections::FxHashMap;

use super::types::RuleAnalysis;
use crate::rules::{Confidence, Rule};

/// Rules whose confidence is not high, cloned in order.
pub fn uncertain_rules(rules: &[Rule]) -> Vec<Rule> {
    rules
        .iter()
        .filter(|r| r.confidence != Confidence::High)
        .cloned()
        .collect()
}

/// Apply `analyses` to the uncertain rules they name. Returns the number
/// of rules updated.
///
/// A negative verdict only drops confidence to low. A positive one sets
/// confidence high above `threshold` (medium otherwise) and copies the
/// description, dependencies, rule type, domain objects, business impact
/// and score. Rules without a verdict are untouched. When a rule id has
/// several verdicts the last one counts.
pub fn apply_enrichment(rules: &mut [Rule], analyses: &[RuleAnalysis], threshold: f64) -> usize {
    let by_id: FxHashMap<&str, &RuleAnalysis> =
        analyses.iter().map(|a| (a.rule_id.as_str(), a)).collect();

    let mut updated = 0;
    for rule in rules.iter_mut().filter(|r| r.confidence != Confidence::High) {
        let Some(analysis) = by_id.get(rule.id.as_str()) else {
            continue;
        };
        if analysis.is_business_rule {
            rule.confidence = if analysis.confidence_score > threshold {
                Confidence::High
            } else {
                Confidence::Medium
            };
            rule.description = Some(analysis.description.clone());
            rule.dependencies = Some(analysis.dependencies.clone());
            rule.rule_type = analysis.rule_type;
            rule.domain_objects = Some(analysis.domain_objects.clone());
            rule.business_impact = Some(analysis.business_impact.clone());
            rule.confidence_score = Some(analysis.confidence_score);
        } else {
            rule.confidence = Confidence::Low;
        }
        updated += 1;
    }
    updated
}
