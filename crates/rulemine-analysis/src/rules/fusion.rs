//! Per-function fusion of rule candidates.

use rulemine_core::types::collections::FxHashMap;

use super::types::Rule;

/// Fuse candidates to one rule per distinct `function_name`.
///
/// Groups keep first-encounter order. The base is the highest-confidence
/// candidate, the first one on ties. `domain` and `domain_attributes` are
/// filled from the other candidates only where the base has none; nothing
/// on the base is ever overwritten.
pub fn merge(candidates: Vec<Rule>) -> Vec<Rule> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: FxHashMap<String, Vec<Rule>> = FxHashMap::default();
    for rule in candidates {
        if !groups.contains_key(&rule.function_name) {
            order.push(rule.function_name.clone());
        }
        groups.entry(rule.function_name.clone()).or_default().push(rule);
    }

    order
        .into_iter()
        .filter_map(|name| groups.remove(&name))
        .filter_map(fuse_group)
        .collect()
}

fn fuse_group(mut group: Vec<Rule>) -> Option<Rule> {
    if group.is_empty() {
        return None;
    }
    let mut base_idx = 0;
    for (idx, rule) in group.iter().enumerate() {
        if rule.confidence > group[base_idx].confidence {
            base_idx = idx;
        }
    }
    let mut base = group.remove(base_idx);
    for other in group {
        if base.domain.is_none() && other.domain.is_some() {
            base.domain = other.domain;
        }
        if base.domain_attributes.is_none() && other.domain_attributes.is_some() {
            base.domain_attributes = other.domain_attributes;
        }
    }
    Some(base)
}
