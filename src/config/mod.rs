//! Configuration management for nmapxl.
//!
//! Settings live in an optional JSON file in the XDG config directory.
//! Command-line flags override anything read from it.

mod settings;

pub use settings::{AppSettings, Paths};
