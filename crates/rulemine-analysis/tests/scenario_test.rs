//! End-to-end scenarios over small fixture trees.

use std::fs;

use rulemine_analysis::enrichment::{apply_enrichment, RuleAnalysis};
use rulemine_analysis::rules::{Confidence, Rule, RuleSource, RuleType};
use rulemine_analysis::AnalysisPipeline;
use rulemine_core::events::NoOpHandler;
use rulemine_core::{CancellationToken, RuleMineConfig};
use tempfile::TempDir;

fn run(files: &[(&str, &str)]) -> rulemine_analysis::AnalysisOutput {
    let dir = TempDir::new().expect("create temp dir");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        fs::write(path, content).expect("write file");
    }
    let pipeline = AnalysisPipeline::new(RuleMineConfig::default()).expect("pipeline");
    let result = pipeline
        .run(dir.path(), &CancellationToken::new(), &NoOpHandler)
        .expect("run");
    assert!(result.is_clean(), "unexpected errors: {:?}", result.errors);
    result.data
}

fn rule_for<'a>(rules: &'a [Rule], function: &str) -> &'a Rule {
    rules
        .iter()
        .find(|r| r.function_name == function)
        .unwrap_or_else(|| panic!("no rule for {function}"))
}

#[test]
fn header_include_and_validate_function() {
    let output = run(&[
        ("a.h", "class Foo { int bar; };\n"),
        (
            "a.cpp",
            "#include \"a.h\"\n\nbool validateFoo(Foo f) { if (f.bar < 0) return false; return true; }\n",
        ),
    ]);

    let a_cpp = output.project.component("a.cpp").expect("a.cpp");
    assert!(a_cpp.dependencies.contains("a.h"));
    let a_h = output.project.component("a.h").expect("a.h");
    assert!(a_h.used_by.contains("a.cpp"));
    assert_eq!(a_h.classes[0].name, "Foo");

    let validate_rules: Vec<_> = output.rules.iter().filter(|r| r.function_name == "validateFoo").collect();
    assert_eq!(validate_rules.len(), 1);
    assert_eq!(validate_rules[0].confidence, Confidence::High);
    assert_eq!(validate_rules[0].source, RuleSource::NamePattern);
    assert_eq!(validate_rules[0].rule_type, RuleType::BusinessRule);
}

#[test]
fn arithmetic_function_is_a_medium_calculation_rule() {
    let output = run(&[("math.cpp", "int total(int a, int b) { return a + b; }\n")]);

    let rule = rule_for(&output.rules, "total");
    assert_eq!(rule.rule_type, RuleType::CalculationRule);
    assert_eq!(rule.confidence, Confidence::Medium);
    assert_eq!(rule.source, RuleSource::CalculationPattern);
    assert_eq!(output.rules.len(), 1);
}

#[test]
fn negative_verdict_only_lowers_confidence() {
    let output = run(&[("math.cpp", "int total(int a, int b) { return a + b; }\n")]);
    let mut rules = output.rules;
    let before = rules[0].clone();

    let verdict = RuleAnalysis {
        rule_id: before.id.clone(),
        is_business_rule: false,
        description: "plain arithmetic".to_string(),
        dependencies: vec!["Ledger".to_string()],
        rule_type: RuleType::BusinessRule,
        domain_objects: vec![],
        business_impact: "none".to_string(),
        confidence_score: 0.99,
    };
    apply_enrichment(&mut rules, &[verdict], 0.7);

    let mut expected = before;
    expected.confidence = Confidence::Low;
    assert_eq!(rules[0], expected);
}

#[test]
fn domain_rules_come_from_discovered_types() {
    let output = run(&[
        (
            "order.h",
            "class Order {\npublic:\n    double total;\n    int status;\n};\n",
        ),
        (
            "shipping.cpp",
            "#include \"order.h\"\n\nvoid ship(Order& order) {\n    order.status = 2;\n    log(order.total);\n}\n",
        ),
        (
            "tax.cpp",
            "#include \"order.h\"\n\nvoid applyDiscount(Order* order) {\n    order->discount = 5;\n}\n",
        ),
    ]);

    let attrs = output.domains.get("Order").expect("Order domain");
    assert!(attrs.contains("status"));
    assert!(attrs.contains("total"));
    assert!(attrs.contains("discount"));

    let ship = rule_for(&output.rules, "ship");
    assert_eq!(ship.domain.as_deref(), Some("Order"));
    assert!(ship.domain_attributes.as_ref().is_some_and(|a| a.contains(&"status".to_string())));
}

#[test]
fn struct_declared_in_header_becomes_a_domain() {
    let output = run(&[
        ("account.h", "struct Account { int id; double balance; };\n"),
        (
            "bank.cpp",
            "#include \"account.h\"\n\nvoid deposit(Account& account, double v) { account.balance += v; log(account.id); }\n",
        ),
    ]);

    let attrs: Vec<_> = output.domains.get("Account").expect("Account domain").iter().cloned().collect();
    assert_eq!(attrs, vec!["balance".to_string(), "id".to_string()]);
    let deposit = rule_for(&output.rules, "deposit");
    assert_eq!(deposit.domain.as_deref(), Some("Account"));
}
