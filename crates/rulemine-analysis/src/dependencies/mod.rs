//! Include resolution: links components by stem-matched `#include` targets.

pub mod resolver;
pub mod types;

pub use resolver::DependencyResolver;
pub use types::{IncludeReport, IncludeResolution};
