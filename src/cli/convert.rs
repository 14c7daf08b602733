//! Conversion command implementation.

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::inputs::resolve_inputs;
use crate::output;
use crate::pipeline::{Pipeline, RunSummary};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Convert report files into a workbook.
#[derive(Args, Debug)]
pub struct ConvertCommand {
    /// Input XML file(s) or wildcard pattern (e.g. "scans/*.xml")
    #[arg(value_name = "INPUT_FILES", required = true, num_args = 1..)]
    pub input_files: Vec<String>,

    /// Output XLSX file [default: output.xlsx]
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Report file extension to accept [default: xml]
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Keep the intermediate CSV file
    #[arg(long)]
    pub keep_csv: bool,
}

impl ConvertCommand {
    /// Execute the conversion. Flags override `settings`.
    pub fn execute(&self, settings: &AppSettings, quiet: bool) -> CliResult<RunSummary> {
        let extension = self
            .extension
            .as_deref()
            .unwrap_or(&settings.document_extension);
        let xlsx_path = self
            .output
            .clone()
            .unwrap_or_else(|| settings.default_output.clone());

        let documents = resolve_inputs(&self.input_files, extension)?;
        debug!(count = documents.len(), extension, "inputs resolved");
        if documents.is_empty() {
            output::print_warning(&format!(
                "no .{} files matched {}",
                extension.trim_start_matches('.'),
                self.input_files.join(" ")
            ));
        }

        Pipeline::new()
            .keep_intermediate(self.keep_csv || settings.keep_intermediate)
            .quiet(quiet)
            .run(&documents, &xlsx_path)
    }
}
