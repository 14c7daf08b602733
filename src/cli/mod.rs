//! Command-line interface definitions.
//!
//! Uses `clap` derive macros for declarative argument parsing:
//! `nmapxl [OPTIONS] <INPUT_FILES>...`

mod convert;

pub use convert::ConvertCommand;

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::pipeline::RunSummary;
use clap::Parser;
use std::path::PathBuf;

/// nmapxl - merge nmap XML reports into one spreadsheet.
///
/// Every (host, port) pair found across the input reports becomes one row
/// of a single-sheet .xlsx workbook.
#[derive(Parser, Debug)]
#[command(name = "nmapxl")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert Nmap XML output to an Excel workbook", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertCommand,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, value_name = "PATH", env = "NMAPXL_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load settings, then run the conversion.
    pub fn execute(&self) -> CliResult<RunSummary> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };

        self.convert.execute(&settings, self.quiet)
    }
}
