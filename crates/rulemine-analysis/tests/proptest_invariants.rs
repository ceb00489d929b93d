//! Property-based invariants for extraction, fusion, discovery and
//! include resolution.

use proptest::prelude::*;

use rulemine_analysis::dependencies::DependencyResolver;
use rulemine_analysis::domain::DomainDiscovery;
use rulemine_analysis::extraction::{extract_body, Component, ComponentExtractor, ExtractionPatterns, FunctionInfo};
use rulemine_analysis::rules::{merge, Confidence, Rule, RuleSource, RuleType};
use rulemine_analysis::scanner::SourceKind;
use rulemine_core::config::{AmbiguousIncludePolicy, AnalysisConfig};

// ---- Strategies ----

/// Balanced brace text built from nested blocks of simple statements.
fn balanced_block() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\(\\))?;".prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(|parts| format!("{{ {} }}", parts.join(" ")))
    })
}

fn confidence() -> impl Strategy<Value = Confidence> {
    prop_oneof![Just(Confidence::Low), Just(Confidence::Medium), Just(Confidence::High)]
}

fn rule_type() -> impl Strategy<Value = RuleType> {
    prop_oneof![
        Just(RuleType::BusinessRule),
        Just(RuleType::ValidationRule),
        Just(RuleType::CalculationRule),
        Just(RuleType::DomainRule),
    ]
}

fn candidate() -> impl Strategy<Value = Rule> {
    ("[a-d]", rule_type(), confidence(), prop::option::of("[A-C][a-z]{2}")).prop_map(
        |(name, rule_type, confidence, domain)| {
            let f = FunctionInfo {
                name: name.clone(),
                return_type: "void".to_string(),
                declaration_line: 1,
                body_text: format!("void {}() {{}}", name),
            };
            let rule = Rule::new(&f, rule_type, confidence, RuleSource::NamePattern);
            match domain {
                Some(d) => rule.with_domain(d, vec!["x".to_string()]),
                None => rule,
            }
        },
    )
}

fn extractor() -> ComponentExtractor {
    ComponentExtractor::new(ExtractionPatterns::new().expect("patterns"))
}

// ---- Extraction ----

proptest! {
    /// Body extraction on balanced input returns balanced, non-empty text.
    #[test]
    fn prop_extracted_body_is_balanced(block in balanced_block()) {
        let src = format!("int f() {{ {} }}", block);
        let body = extract_body(&src, 0);
        prop_assert!(body.is_some());
        let body = body.unwrap();
        prop_assert!(!body.is_empty());
        let opens = body.matches('{').count();
        let closes = body.matches('}').count();
        prop_assert_eq!(opens, closes);
        let closed = body.ends_with('}');
        prop_assert!(closed);
    }

    /// A prototype with no `{` after it never becomes a function.
    #[test]
    fn prop_prototypes_never_extracted(name in "[a-z][a-z0-9_]{0,10}", ret in "(int|bool|double|Foo)") {
        let src = format!("{} {}(int a, int b);\n// trailing comment\n", ret, name);
        let component = extractor().extract("proto.h", &src);
        prop_assert!(!component.functions.contains_key(&name));
    }
}

// ---- Fusion ----

proptest! {
    /// The fused rule is never less confident than its best candidate.
    #[test]
    fn prop_fusion_is_confidence_monotonic(candidates in prop::collection::vec(candidate(), 0..20)) {
        let fused = merge(candidates.clone());
        for rule in &fused {
            let best = candidates
                .iter()
                .filter(|c| c.function_name == rule.function_name)
                .map(|c| c.confidence)
                .max()
                .unwrap();
            prop_assert!(rule.confidence >= best);
        }
    }

    /// One rule per distinct function name.
    #[test]
    fn prop_fusion_one_rule_per_function(candidates in prop::collection::vec(candidate(), 0..20)) {
        let mut names: Vec<_> = candidates.iter().map(|c| c.function_name.clone()).collect();
        names.sort();
        names.dedup();
        prop_assert_eq!(merge(candidates).len(), names.len());
    }

    /// Fusing the fused output changes nothing.
    #[test]
    fn prop_fusion_is_idempotent(candidates in prop::collection::vec(candidate(), 0..20)) {
        let once = merge(candidates);
        let twice = merge(once.clone());
        prop_assert_eq!(once, twice);
    }
}

// ---- Domain discovery ----

proptest! {
    /// Every kept domain has at least two attributes, and at least the
    /// configured number; a lower configured value does not lower the floor.
    #[test]
    fn prop_domains_are_pruned(
        attrs in prop::collection::vec("[a-z]{3,8}", 0..5),
        min in 0usize..5,
    ) {
        let accesses: String = attrs.iter().map(|a| format!(" account.{} = 1;", a)).collect();
        let body = format!("void f() {{ struct Account acc;{} }}", accesses);
        let mut c = Component::new("f.cpp", SourceKind::Source);
        c.functions.insert("f".to_string(), FunctionInfo {
            name: "f".to_string(),
            return_type: "void".to_string(),
            declaration_line: 1,
            body_text: body,
        });

        let config = AnalysisConfig { min_domain_attributes: Some(min), ..AnalysisConfig::default() };
        let domains = DomainDiscovery::new(&config).unwrap().discover(&[c]);
        for (_, attributes) in domains.iter() {
            prop_assert!(attributes.len() >= 2);
            prop_assert!(attributes.len() >= min);
        }
    }
}

// ---- Include resolution ----

proptest! {
    /// B ∈ A.dependencies iff A ∈ B.used_by.
    #[test]
    fn prop_dependency_graph_is_symmetric(
        links in prop::collection::vec((0usize..6, 0usize..6), 0..20),
        skip in any::<bool>(),
    ) {
        let names = ["a.h", "a.cpp", "b.hpp", "lib/b.h", "c.cpp", "util.h"];
        let mut components: Vec<Component> = names
            .iter()
            .map(|n| Component::new(*n, SourceKind::Source))
            .collect();
        for (from, to) in links {
            let target = names[to].rsplit('/').next().unwrap().to_string();
            components[from].includes.insert(target);
        }
        let policy = if skip { AmbiguousIncludePolicy::Skip } else { AmbiguousIncludePolicy::FirstMatch };
        DependencyResolver::new(policy).resolve(&mut components);

        for a in &components {
            prop_assert!(!a.dependencies.contains(&a.path));
            for b in &components {
                prop_assert_eq!(a.dependencies.contains(&b.path), b.used_by.contains(&a.path));
            }
        }
    }
}
