//! Component data model.

use std::path::Path;

use rulemine_core::types::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

use crate::scanner::SourceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    /// First base class only.
    pub base_class: Option<String>,
    pub declaration_line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// As written, possibly qualified (`Order::validate`).
    pub name: String,
    pub return_type: String,
    pub declaration_line: u32,
    /// Signature start through the matching closing brace.
    pub body_text: String,
}

impl FunctionInfo {
    /// Last `::` segment of the name.
    pub fn unqualified_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Class,
    Struct,
    Typename,
}

impl TemplateKind {
    pub fn from_keyword(keyword: &str) -> Option<TemplateKind> {
        match keyword {
            "class" => Some(TemplateKind::Class),
            "struct" => Some(TemplateKind::Struct),
            "typename" => Some(TemplateKind::Typename),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub kind: TemplateKind,
    pub name: String,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    pub operator_symbol: String,
    pub line: u32,
}

/// One source or header file.
///
/// `dependencies` and `used_by` are empty after extraction and filled by
/// the dependency resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Root-relative, `/`-separated path. Unique per project.
    pub path: String,
    pub kind: SourceKind,
    pub includes: BTreeSet<String>,
    pub namespaces: BTreeSet<String>,
    pub classes: Vec<ClassInfo>,
    /// Names declared with `struct`.
    pub structs: BTreeSet<String>,
    pub functions: BTreeMap<String, FunctionInfo>,
    pub templates: Vec<TemplateInfo>,
    pub operators: Vec<OperatorInfo>,
    pub dependencies: BTreeSet<String>,
    pub used_by: BTreeSet<String>,
}

impl Component {
    pub fn new(path: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            path: path.into(),
            kind,
            includes: BTreeSet::new(),
            namespaces: BTreeSet::new(),
            classes: Vec::new(),
            structs: BTreeSet::new(),
            functions: BTreeMap::new(),
            templates: Vec::new(),
            operators: Vec::new(),
            dependencies: BTreeSet::new(),
            used_by: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.path
    }

    /// File name without its last extension.
    pub fn stem(&self) -> Option<&str> {
        Path::new(&self.path).file_stem()?.to_str()
    }

    pub fn is_header(&self) -> bool {
        self.kind == SourceKind::Header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_ignores_directories_and_extension() {
        let c = Component::new("include/billing/invoice.hpp", SourceKind::Header);
        assert_eq!(c.stem(), Some("invoice"));
        assert!(c.is_header());
    }

    #[test]
    fn unqualified_name_strips_scopes() {
        let f = FunctionInfo {
            name: "billing::Invoice::validateTotal".to_string(),
            return_type: "bool".to_string(),
            declaration_line: 1,
            body_text: String::new(),
        };
        assert_eq!(f.unqualified_name(), "validateTotal");
    }
}
