//! Per-file component extraction.

use std::path::Path;

use crate::scanner::SourceKind;

use super::body::{extract_body, LineIndex};
use super::patterns::{is_rejected_keyword, leading_identifier, ExtractionPatterns, SIGNATURE_MODIFIERS};
use super::types::{ClassInfo, Component, FunctionInfo, OperatorInfo, TemplateInfo, TemplateKind};

/// Turns file text into a `Component`. Stateless apart from its compiled
/// patterns, so one extractor is shared across worker threads.
pub struct ComponentExtractor {
    patterns: ExtractionPatterns,
}

impl ComponentExtractor {
    pub fn new(patterns: ExtractionPatterns) -> Self {
        Self { patterns }
    }

    /// Extract structural facts from `text`. `path` becomes the component id;
    /// its extension decides the component kind.
    pub fn extract(&self, path: &str, text: &str) -> Component {
        let kind = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(SourceKind::from_extension)
            .unwrap_or(SourceKind::Source);
        let mut component = Component::new(path, kind);
        let lines = LineIndex::new(text);

        for caps in self.patterns.include.captures_iter(text) {
            component.includes.insert(caps[1].trim().to_string());
        }

        for caps in self.patterns.namespace.captures_iter(text) {
            if caps.name("using").is_none() {
                component.namespaces.insert(caps["name"].to_string());
            }
        }

        self.extract_classes(text, &lines, &mut component);
        self.extract_functions(text, &lines, &mut component);

        for caps in self.patterns.template.captures_iter(text) {
            if let Some(kind) = TemplateKind::from_keyword(&caps[1]) {
                let offset = caps.get(0).map_or(0, |m| m.start());
                component.templates.push(TemplateInfo {
                    kind,
                    name: caps[2].to_string(),
                    line: lines.line_of(offset),
                });
            }
        }

        for caps in self.patterns.operator.captures_iter(text) {
            let offset = caps.get(0).map_or(0, |m| m.start());
            component.operators.push(OperatorInfo {
                operator_symbol: caps[1].to_string(),
                line: lines.line_of(offset),
            });
        }

        tracing::trace!(
            path,
            functions = component.functions.len(),
            classes = component.classes.len(),
            includes = component.includes.len(),
            "extracted component"
        );
        component
    }

    fn extract_classes(&self, text: &str, lines: &LineIndex, component: &mut Component) {
        for caps in self.patterns.class.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let before = text[..whole.start()].trim_end();
            // `template <class T>` parameters and `enum class` are not classes.
            if before.ends_with('<') || before.ends_with(',') || before.ends_with("enum") {
                continue;
            }
            component.classes.push(ClassInfo {
                name: caps[1].to_string(),
                base_class: caps.get(2).map(|m| m.as_str().to_string()),
                declaration_line: lines.line_of(whole.start()),
            });
        }
        for caps in self.patterns.structure.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let before = text[..whole.start()].trim_end();
            if before.ends_with('<') || before.ends_with(',') || before.ends_with("enum") {
                continue;
            }
            component.structs.insert(caps[1].to_string());
        }
    }

    fn extract_functions(&self, text: &str, lines: &LineIndex, component: &mut Component) {
        for caps in self.patterns.function.captures_iter(text) {
            let (Some(sig), Some(ret), Some(name)) = (caps.name("sig"), caps.name("ret"), caps.name("name")) else {
                continue;
            };
            let ret_ident = leading_identifier(ret.as_str());
            let name_str = name.as_str();
            let last_segment = name_str.rsplit("::").next().unwrap_or(name_str);
            if is_rejected_keyword(ret_ident)
                || is_rejected_keyword(last_segment)
                || SIGNATURE_MODIFIERS.contains(&ret_ident)
            {
                continue;
            }

            let Some(body) = extract_body(text, sig.start()) else {
                tracing::trace!(function = name_str, "unterminated body, skipped");
                continue;
            };

            let ptr = caps.name("ptr").map_or("", |m| m.as_str().trim());
            let function = FunctionInfo {
                name: name_str.to_string(),
                return_type: format!("{}{}", ret.as_str(), ptr),
                declaration_line: lines.line_of(sig.start()),
                body_text: body.to_string(),
            };
            component.functions.insert(function.name.clone(), function);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ComponentExtractor {
        ComponentExtractor::new(ExtractionPatterns::new().unwrap())
    }

    #[test]
    fn includes_and_namespaces() {
        let src = "#include \"order.h\"\n#include <vector>\nusing namespace std;\nnamespace billing {\n}\n";
        let c = extractor().extract("src/order.cpp", src);
        assert_eq!(c.kind, SourceKind::Source);
        assert!(c.includes.contains("order.h"));
        assert!(c.includes.contains("vector"));
        assert_eq!(c.namespaces.iter().collect::<Vec<_>>(), vec!["billing"]);
    }

    #[test]
    fn classes_keep_first_base() {
        let src = "class Order : public Entity, private Auditable {\n};\nclass Item;\ntemplate <class T> class Box {};\nenum class Color { Red };\n";
        let c = extractor().extract("order.h", src);
        let names: Vec<_> = c.classes.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["Order", "Item", "Box"]);
        assert_eq!(c.classes[0].base_class.as_deref(), Some("Entity"));
        assert_eq!(c.classes[0].declaration_line, 1);
        assert_eq!(c.classes[1].base_class, None);
    }

    #[test]
    fn structs_are_recorded() {
        let src = "typedef struct Account {\n    int id;\n} Account;\nstruct Ledger : Base { };\nenum struct Kind { A };\n";
        let c = extractor().extract("account.h", src);
        assert_eq!(c.structs.iter().collect::<Vec<_>>(), vec!["Account", "Ledger"]);
        assert!(c.classes.is_empty());
    }

    #[test]
    fn function_bodies_include_signature() {
        let src = "bool validateOrder(const Order& o) {\n    if (o.total < 0) { return false; }\n    return true;\n}\n";
        let c = extractor().extract("order.cpp", src);
        let f = &c.functions["validateOrder"];
        assert_eq!(f.return_type, "bool");
        assert_eq!(f.declaration_line, 1);
        assert!(f.body_text.starts_with("bool validateOrder("));
        assert!(f.body_text.ends_with("return true;\n}"));
    }

    #[test]
    fn prototypes_and_control_flow_are_ignored() {
        let src = "int total(int a);\nvoid run() {\n    if (x) {\n    } else if (y) {\n    }\n    while (z) { }\n}\n";
        let c = extractor().extract("run.cpp", src);
        assert_eq!(c.functions.keys().collect::<Vec<_>>(), vec!["run"]);
    }

    #[test]
    fn unterminated_function_is_dropped() {
        let c = extractor().extract("broken.cpp", "int broken() {\n  if (x) {\n");
        assert!(c.functions.is_empty());
    }

    #[test]
    fn later_definition_replaces_earlier() {
        let src = "int f() { return 1; }\nint f() { return 2; }\n";
        let c = extractor().extract("f.cpp", src);
        assert_eq!(c.functions.len(), 1);
        assert!(c.functions["f"].body_text.contains("return 2"));
        assert_eq!(c.functions["f"].declaration_line, 2);
    }

    #[test]
    fn templates_and_operators() {
        let src = "template <typename T>\nclass Stack {\n};\nbool operator==(const A& a, const A& b) { return true; }\n";
        let c = extractor().extract("stack.hpp", src);
        assert_eq!(c.templates.len(), 1);
        assert_eq!(c.templates[0].kind, TemplateKind::Class);
        assert_eq!(c.templates[0].name, "Stack");
        assert_eq!(c.operators.len(), 1);
        assert_eq!(c.operators[0].operator_symbol, "==");
        assert_eq!(c.operators[0].line, 4);
    }

    #[test]
    fn methods_and_modifiers() {
        let src = "class A {\npublic:\n    virtual int get() const override { return x; }\n    static Foo* make() { return nullptr; }\n};\nstd::string A::name() const {\n    return n;\n}\n";
        let c = extractor().extract("a.cpp", src);
        assert_eq!(c.functions["get"].return_type, "int");
        assert_eq!(c.functions["make"].return_type, "Foo*");
        assert_eq!(c.functions["A::name"].return_type, "std::string");
        assert_eq!(c.functions["A::name"].declaration_line, 6);
    }

    #[test]
    fn empty_text_yields_empty_component() {
        let c = extractor().extract("empty.h", "");
        assert_eq!(c.kind, SourceKind::Header);
        assert!(c.functions.is_empty() && c.classes.is_empty() && c.includes.is_empty());
    }
}
