//! Domain discovery: candidate domain types and their observed attributes.

pub mod discovery;
pub mod types;

pub use discovery::DomainDiscovery;
pub use types::DomainCandidates;
