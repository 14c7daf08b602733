//! Console output.
//!
//! Progress lines go to stdout, problems to stderr. Structured diagnostics
//! are emitted separately through `tracing`.

use crate::pipeline::RunSummary;
use console::style;
use std::path::Path;

/// Echo a report path as it is picked up.
pub fn print_document(path: &Path) {
    println!("{} {}", style("•").dim(), path.display());
}

/// Announce removal of the intermediate file.
pub fn print_removed(path: &Path) {
    println!("{} Deleting {}", style("-").red().bold(), path.display());
}

/// Print the end-of-run counts.
pub fn print_summary(summary: &RunSummary) {
    println!(
        "{} {} document(s), {} host(s), {} row(s)",
        style("Summary:").bold(),
        style(summary.documents).white().bold(),
        style(summary.hosts).white().bold(),
        style(summary.rows).green().bold()
    );
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
