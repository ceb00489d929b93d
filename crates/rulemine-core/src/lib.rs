//! rulemine-core: shared foundation for the rulemine analysis engine.
//!
//! Holds everything the analysis crate builds on but that carries no
//! analysis logic of its own:
//! - Errors: one `thiserror` enum per subsystem plus the pipeline aggregate
//! - Config: TOML-based layered configuration
//! - Events: handler trait with no-op defaults and a synchronous dispatcher
//! - Tracing: `tracing-subscriber` initialization driven by `RULEMINE_LOG`
//! - Traits: cooperative cancellation
//! - Types: fast-hash collections

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::RuleMineConfig;
pub use errors::{PipelineError, PipelineResult};
pub use events::{EventDispatcher, RuleMineEventHandler};
pub use traits::{Cancellable, CancellationToken};
