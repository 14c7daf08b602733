//! Error types for nmapxl.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking report documents and writing the CSV.
///
/// Every variant is fatal: the run stops at the first one.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("{path}: no <{element}> element beneath <{parent}>")]
    MissingElement {
        path: PathBuf,
        parent: &'static str,
        element: &'static str,
    },

    #[error("CSV write failed")]
    Csv(#[from] csv::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning the CSV into a workbook.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to load {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("workbook error")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("table too large for a worksheet: {0} rows")]
    TooManyRows(usize),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),
}

/// Top-level error returned by CLI handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid input pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type alias for conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type alias for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;
