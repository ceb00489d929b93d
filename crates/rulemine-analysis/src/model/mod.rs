//! Project model: aggregated structural view of one build.

pub mod build_system;
pub mod builder;
pub mod types;

pub use build_system::BuildSystem;
pub use builder::ProjectModelBuilder;
pub use types::{ProjectMetrics, ProjectModel};
