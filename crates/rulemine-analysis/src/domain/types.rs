//! Discovered domain candidates.

use rulemine_core::types::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

/// Domain name → attribute names. Read-only once discovery finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainCandidates {
    domains: BTreeMap<String, BTreeSet<String>>,
}

impl DomainCandidates {
    pub fn new(domains: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { domains }
    }

    pub fn get(&self, domain: &str) -> Option<&BTreeSet<String>> {
        self.domains.get(domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.domains.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.domains.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, BTreeSet<String>> {
        self.domains
    }
}
