//! Data structures shared across rulemine crates.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
