//! Single-pass domain discovery over the whole component set.
//!
//! Per component, in discovery order:
//! 1. collect candidate type names (class/struct declarations in function
//!    bodies, class and struct names of headers, optionally `const T&` parameter types);
//! 2. for every candidate known so far that appears in a function body,
//!    collect member names accessed through it (`order.total`,
//!    `order_ref->items`).
//!
//! Candidates with too few attributes are pruned at the end. Because step 2
//! only sees candidates found up to the current component, the result
//! depends on component order; the walker's sorted order keeps it stable.

use regex::Regex;
use rulemine_core::config::AnalysisConfig;
use rulemine_core::errors::AnalysisError;
use rulemine_core::types::collections::{BTreeMap, BTreeSet, FxHashMap, FxHashSet};

use super::types::DomainCandidates;
use crate::extraction::Component;

const TYPE_DECLARATION_PATTERN: &str = r"\b(?:class|struct)\s+(\w+)";
const CONST_REF_PARAMETER_PATTERN: &str = r"\bconst\s+((?:\w+::)*\w+)\s*&";

pub struct DomainDiscovery {
    generic_names: FxHashSet<String>,
    min_attributes: usize,
    discover_parameter_types: bool,
    type_declaration: Regex,
    const_ref_parameter: Regex,
}

impl DomainDiscovery {
    pub fn new(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| AnalysisError::InvalidVocabulary {
                field: "domain discovery pattern".to_string(),
                message: e.to_string(),
            })
        };
        Ok(Self {
            generic_names: config
                .effective_generic_type_names()
                .into_iter()
                .map(|n| n.to_lowercase())
                .collect(),
            min_attributes: config.effective_min_domain_attributes(),
            discover_parameter_types: config.effective_discover_parameter_types(),
            type_declaration: compile(TYPE_DECLARATION_PATTERN)?,
            const_ref_parameter: compile(CONST_REF_PARAMETER_PATTERN)?,
        })
    }

    pub fn is_generic_name(&self, name: &str) -> bool {
        self.generic_names.contains(&name.to_lowercase())
    }

    pub fn discover(&self, components: &[Component]) -> DomainCandidates {
        let mut domains: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut member_patterns: FxHashMap<String, Option<Regex>> = FxHashMap::default();

        for component in components {
            self.collect_types(component, &mut domains);
            self.collect_attributes(component, &mut domains, &mut member_patterns);
        }

        let before = domains.len();
        domains.retain(|_, attributes| attributes.len() >= self.min_attributes);
        tracing::debug!(
            candidates = before,
            kept = domains.len(),
            min_attributes = self.min_attributes,
            "domain discovery complete"
        );
        DomainCandidates::new(domains)
    }

    fn collect_types(&self, component: &Component, domains: &mut BTreeMap<String, BTreeSet<String>>) {
        let mut add = |name: &str| {
            if !self.is_generic_name(name) {
                domains.entry(name.to_string()).or_default();
            }
        };

        if component.is_header() {
            for class in &component.classes {
                add(&class.name);
            }
            for name in &component.structs {
                add(name);
            }
        }

        for function in component.functions.values() {
            for caps in self.type_declaration.captures_iter(&function.body_text) {
                add(&caps[1]);
            }
            if self.discover_parameter_types {
                for caps in self.const_ref_parameter.captures_iter(&function.body_text) {
                    let qualified = &caps[1];
                    add(qualified.rsplit("::").next().unwrap_or(qualified));
                }
            }
        }
    }

    fn collect_attributes(
        &self,
        component: &Component,
        domains: &mut BTreeMap<String, BTreeSet<String>>,
        member_patterns: &mut FxHashMap<String, Option<Regex>>,
    ) {
        for function in component.functions.values() {
            let content = function.body_text.to_lowercase();
            for (domain, attributes) in domains.iter_mut() {
                let lower = domain.to_lowercase();
                if !content.contains(&lower) {
                    continue;
                }
                let pattern = member_patterns
                    .entry(lower.clone())
                    .or_insert_with(|| member_access_pattern(&lower));
                let Some(pattern) = pattern else { continue };
                for caps in pattern.captures_iter(&content) {
                    let attribute = &caps[1];
                    if !self.is_generic_name(attribute) {
                        attributes.insert(attribute.to_string());
                    }
                }
            }
        }
    }
}

/// `{domain}\w*` followed by `->` or `.` and a member name.
fn member_access_pattern(lower_domain: &str) -> Option<Regex> {
    let pattern = format!(r"{}\w*(?:->|\.)([a-z_]\w*)", regex::escape(lower_domain));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!(domain = lower_domain, error = %e, "member access pattern rejected");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{ClassInfo, FunctionInfo};
    use crate::scanner::SourceKind;

    fn function(name: &str, body: &str) -> FunctionInfo {
        FunctionInfo {
            name: name.to_string(),
            return_type: "void".to_string(),
            declaration_line: 1,
            body_text: body.to_string(),
        }
    }

    fn source(path: &str, functions: &[(&str, &str)]) -> Component {
        let mut c = Component::new(path, SourceKind::Source);
        for (name, body) in functions {
            c.functions.insert(name.to_string(), function(name, body));
        }
        c
    }

    fn discovery() -> DomainDiscovery {
        DomainDiscovery::new(&AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn struct_in_body_collects_member_accesses() {
        let c = source(
            "order.cpp",
            &[("process", "void process() { struct Order o; o.id = 1; Order* p; order_ref->total = 0; order.status = 2; }")],
        );
        let domains = discovery().discover(&[c]);
        let attrs = domains.get("Order").unwrap();
        assert!(attrs.contains("total"));
        assert!(attrs.contains("status"));
    }

    #[test]
    fn header_classes_are_candidates() {
        let mut header = Component::new("invoice.h", SourceKind::Header);
        header.classes.push(ClassInfo {
            name: "Invoice".to_string(),
            base_class: None,
            declaration_line: 1,
        });
        let user = source(
            "billing.cpp",
            &[("bill", "void bill(Invoice& invoice) { invoice.amount += 1; invoice->due = 0; }")],
        );
        let domains = discovery().discover(&[header, user]);
        let attrs: Vec<_> = domains.get("Invoice").unwrap().iter().cloned().collect();
        assert_eq!(attrs, vec!["amount".to_string(), "due".to_string()]);
    }

    #[test]
    fn header_structs_are_candidates() {
        let mut header = Component::new("account.h", SourceKind::Header);
        header.structs.insert("Account".to_string());
        let user = source(
            "bank.cpp",
            &[("deposit", "void deposit(Account& account, double v) { account.balance += v; log(account.id); }")],
        );
        let domains = discovery().discover(&[header, user]);
        let attrs: Vec<_> = domains.get("Account").unwrap().iter().cloned().collect();
        assert_eq!(attrs, vec!["balance".to_string(), "id".to_string()]);
    }

    #[test]
    fn sparse_and_generic_candidates_are_pruned() {
        let c = source(
            "x.cpp",
            &[("f", "void f() { struct Data d; struct Account a; account.balance = 1; }")],
        );
        let domains = discovery().discover(&[c]);
        assert!(domains.get("Data").is_none());
        assert!(domains.get("Account").is_none());
        assert!(domains.is_empty());
    }

    #[test]
    fn configured_minimum_cannot_go_below_two() {
        let mut header = Component::new("order.h", SourceKind::Header);
        header.classes.push(ClassInfo {
            name: "Order".to_string(),
            base_class: None,
            declaration_line: 1,
        });
        let user = source("order.cpp", &[("close", "void close(Order& order) { order.total = 1; }")]);
        let config = AnalysisConfig {
            min_domain_attributes: Some(1),
            ..AnalysisConfig::default()
        };
        let domains = DomainDiscovery::new(&config).unwrap().discover(&[header, user]);
        assert!(domains.get("Order").is_none());
    }

    #[test]
    fn generic_attributes_are_ignored() {
        let c = source(
            "x.cpp",
            &[("f", "void f() { struct Payment p; payment.value = 1; payment.data = 2; payment.amount = 3; }")],
        );
        let domains = discovery().discover(&[c]);
        assert!(domains.is_empty());
    }

    #[test]
    fn parameter_types_only_when_enabled() {
        let c = source(
            "x.cpp",
            &[("f", "void f(const Customer& customer) { customer.name; customer.email; }")],
        );
        assert!(discovery().discover(std::slice::from_ref(&c)).is_empty());

        let config = AnalysisConfig {
            discover_parameter_types: Some(true),
            ..AnalysisConfig::default()
        };
        let domains = DomainDiscovery::new(&config).unwrap().discover(&[c]);
        assert_eq!(domains.names(), vec!["Customer".to_string()]);
    }

    #[test]
    fn empty_input() {
        assert!(discovery().discover(&[]).is_empty());
    }
}
