//! Core type definitions.
//!
//! Plain records shared by the extractor and the converter.

mod record;

pub use record::{FlatRecord, ServiceInfo};
