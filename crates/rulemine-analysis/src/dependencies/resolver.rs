//! Stem-based include resolver.
//!
//! `#include "sub/order.h"` resolves to every in-project component whose
//! file stem is `order`, whatever its directory or extension. The linking
//! policy decides what happens when several components share the stem.

use std::path::Path;

use rulemine_core::config::AmbiguousIncludePolicy;
use rulemine_core::types::collections::FxHashMap;

use super::types::{IncludeReport, IncludeResolution};
use crate::extraction::Component;

/// Stem → component indices, in discovery order.
struct StemIndex {
    by_stem: FxHashMap<String, Vec<usize>>,
}

impl StemIndex {
    fn build(components: &[Component]) -> Self {
        let mut by_stem: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (idx, component) in components.iter().enumerate() {
            if let Some(stem) = component.stem() {
                by_stem.entry(stem.to_string()).or_default().push(idx);
            }
        }
        Self { by_stem }
    }

    fn candidates(&self, stem: &str) -> &[usize] {
        self.by_stem.get(stem).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub struct DependencyResolver {
    policy: AmbiguousIncludePolicy,
}

impl DependencyResolver {
    pub fn new(policy: AmbiguousIncludePolicy) -> Self {
        Self { policy }
    }

    /// Resolve every include of every component and fill `dependencies` and
    /// `used_by`. Any previous links are cleared first, so re-running gives
    /// the same result.
    pub fn resolve(&self, components: &mut [Component]) -> Vec<IncludeReport> {
        let index = StemIndex::build(components);
        let mut reports = Vec::new();
        let mut edges: Vec<(usize, usize)> = Vec::new();

        for (from, component) in components.iter().enumerate() {
            for include in &component.includes {
                let mut candidates: Vec<usize> = include_stem(include)
                    .map(|stem| {
                        index
                            .candidates(stem)
                            .iter()
                            .copied()
                            .filter(|&idx| idx != from)
                            .collect()
                    })
                    .unwrap_or_default();
                // Exact file-name matches first; discovery order otherwise.
                let wanted = include_file_name(include);
                candidates.sort_by_key(|&idx| include_file_name(&components[idx].path) != wanted);

                let resolution = match candidates.as_slice() {
                    [] => IncludeResolution::Unresolved,
                    [only] => {
                        edges.push((from, *only));
                        IncludeResolution::Resolved(components[*only].path.clone())
                    }
                    [first, ..] => {
                        if self.policy == AmbiguousIncludePolicy::FirstMatch {
                            edges.push((from, *first));
                        }
                        IncludeResolution::Ambiguous(
                            candidates.iter().map(|&idx| components[idx].path.clone()).collect(),
                        )
                    }
                };

                reports.push(IncludeReport {
                    component: component.path.clone(),
                    include: include.clone(),
                    resolution,
                });
            }
        }

        for component in components.iter_mut() {
            component.dependencies.clear();
            component.used_by.clear();
        }
        for &(from, to) in &edges {
            let to_id = components[to].path.clone();
            let from_id = components[from].path.clone();
            components[from].dependencies.insert(to_id);
            components[to].used_by.insert(from_id);
        }

        let ambiguous = reports
            .iter()
            .filter(|r| matches!(r.resolution, IncludeResolution::Ambiguous(_)))
            .count();
        tracing::debug!(
            includes = reports.len(),
            links = edges.len(),
            ambiguous,
            policy = ?self.policy,
            "includes resolved"
        );
        reports
    }
}

fn include_stem(include: &str) -> Option<&str> {
    Path::new(include).file_stem()?.to_str()
}

fn include_file_name(path: &str) -> Option<&str> {
    Path::new(path).file_name()?.to_str()
}
