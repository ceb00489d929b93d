//! Flat records for the external similarity index.

pub mod record;

pub use record::{record_id, IndexRecord};
