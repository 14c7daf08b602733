//! # nmapxl - Nmap XML to Spreadsheet Converter
//!
//! nmapxl merges one or more nmap XML reports into a single flat table and
//! writes it as an `.xlsx` workbook.
//!
//! ## Pipeline
//!
//! 1. **Extract**: every `<host>`/`<port>` pair becomes one CSV row with the
//!    columns `Host, hostname, Port, Service, Product, Version, ExtraInfo`.
//! 2. **Convert**: the CSV is loaded and written as a one-sheet workbook with
//!    a leading row-index column, then the CSV is removed.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nmapxl::pipeline::Pipeline;
//! use std::path::Path;
//!
//! let documents = ["scan-a.xml", "scan-b.xml"];
//! let summary = Pipeline::new()
//!     .run(&documents, Path::new("output.xlsx"))
//!     .expect("conversion failed");
//! println!("{} rows written", summary.rows);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Flat record definitions
//! - [`extract`] - Report parsing and CSV row extraction
//! - [`convert`] - CSV to workbook conversion and cleanup
//! - [`inputs`] - Input pattern expansion
//! - [`pipeline`] - The two stages chained together
//! - [`config`] - Settings file handling
//! - [`error`] - Error types
//! - [`output`] - Console output helpers

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod inputs;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConvertError, ExtractError};
pub use extract::Extractor;
pub use convert::Converter;
pub use pipeline::{Pipeline, RunSummary};
pub use types::{FlatRecord, ServiceInfo};
