//! Compiled pattern tables for component extraction.

use regex::Regex;
use rulemine_core::errors::ExtractionError;

pub const INCLUDE_PATTERN: &str = r#"#\s*include\s*[<"]([^>"]+)[>"]"#;

pub const NAMESPACE_PATTERN: &str = r"\b(?P<using>using\s+)?namespace\s+(?P<name>\w+(?:::\w+)*)";

pub const TEMPLATE_PATTERN: &str = r"template\s*<[^>]+>\s*(class|struct|typename)\s+(\w+)";

pub const OPERATOR_PATTERN: &str = r"operator\s*([+\-*/=%^&|<>!]+|\[\]|\(\))\s*\([^)]*\)";

pub const CLASS_PATTERN: &str =
    r"\bclass\s+(\w+)(?:\s*:\s*(?:public|private|protected)\s+((?:\w+::)*\w+))?";

pub const STRUCT_PATTERN: &str = r"\bstruct\s+(\w+)";

/// A definition: optional template header and modifiers, return type,
/// possibly qualified name, parameter list, trailing qualifiers, then `{`.
/// Anchored at line start or after `;`, `{`, `}` so prototypes and calls
/// inside expressions do not match.
pub const FUNCTION_PATTERN: &str = concat!(
    r"(?m)(?:^|[;{}])\s*",
    r"(?P<sig>",
    r"(?:template\s*<[^;{}()]*>\s*)?",
    r"(?:(?:virtual|static|inline|explicit|const|constexpr|extern|friend|unsigned|signed|long|short)\s+)*",
    r"(?P<ret>(?:\w+::)*\w+(?:\s*<[^;{}()]*>)?)",
    r"(?P<ptr>\s*[*&]+\s*|\s+)",
    r"(?P<name>(?:\w+::)*~?\w+)",
    r"\s*\([^)]*\)",
    r"(?:\s*(?:const|noexcept|override|final))*",
    r"\s*)\{",
);

/// Identifiers that can never be a return type or function name.
pub const REJECTED_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "break", "continue", "return", "try",
    "catch", "throw", "goto", "new", "delete", "sizeof",
];

/// Modifiers; a "return type" made of one of these means there was none.
pub const SIGNATURE_MODIFIERS: &[&str] = &[
    "virtual", "static", "inline", "explicit", "const", "constexpr", "extern", "friend",
];

/// All extraction regexes, compiled once and shared by every extractor.
#[derive(Debug, Clone)]
pub struct ExtractionPatterns {
    pub include: Regex,
    pub namespace: Regex,
    pub template: Regex,
    pub operator: Regex,
    pub class: Regex,
    pub structure: Regex,
    pub function: Regex,
}

impl ExtractionPatterns {
    pub fn new() -> Result<Self, ExtractionError> {
        Ok(Self {
            include: compile("include", INCLUDE_PATTERN)?,
            namespace: compile("namespace", NAMESPACE_PATTERN)?,
            template: compile("template", TEMPLATE_PATTERN)?,
            operator: compile("operator", OPERATOR_PATTERN)?,
            class: compile("class", CLASS_PATTERN)?,
            structure: compile("struct", STRUCT_PATTERN)?,
            function: compile("function", FUNCTION_PATTERN)?,
        })
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, ExtractionError> {
    Regex::new(pattern).map_err(|e| ExtractionError::InvalidPattern {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Leading identifier of a possibly qualified or templated type or name.
pub(crate) fn leading_identifier(text: &str) -> &str {
    let end = text
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    &text[..end]
}

pub(crate) fn is_rejected_keyword(ident: &str) -> bool {
    REJECTED_KEYWORDS.contains(&ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert!(ExtractionPatterns::new().is_ok());
    }

    #[test]
    fn function_pattern_skips_prototypes() {
        let p = ExtractionPatterns::new().unwrap();
        assert!(!p.function.is_match("int validate(int x);\n"));
        assert!(p.function.is_match("int validate(int x) {\n return x; }\n"));
    }

    #[test]
    fn function_pattern_captures_qualified_names() {
        let p = ExtractionPatterns::new().unwrap();
        let caps = p
            .function
            .captures("std::vector<int>& Order::items() const {\n}")
            .unwrap();
        assert_eq!(&caps["ret"], "std::vector<int>");
        assert_eq!(caps["ptr"].trim(), "&");
        assert_eq!(&caps["name"], "Order::items");
    }

    #[test]
    fn leading_identifier_stops_at_punctuation() {
        assert_eq!(leading_identifier("std::string"), "std");
        assert_eq!(leading_identifier("vector<int>"), "vector");
        assert_eq!(leading_identifier("else"), "else");
    }
}
