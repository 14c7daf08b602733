//! Tabular-to-spreadsheet converter.
//!
//! Loads the intermediate CSV, writes it as a single-sheet workbook with a
//! leading 0-based index column, then removes the CSV. Failing to load or
//! write is fatal; failing to remove the CSV is only reported.

mod table;

pub use table::{parse_number, ColumnKind, Table};

use crate::error::{ConvertError, ConvertResult};
use crate::output;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Rows available on one worksheet, header included.
const MAX_SHEET_ROWS: usize = 1_048_576;

/// Outcome of the intermediate file cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleanup {
    Removed,
    /// Left in place on request.
    Kept,
    /// Removal failed with the given message.
    Failed(String),
}

/// Converts an intermediate CSV into a workbook.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    keep_intermediate: bool,
    quiet: bool,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the CSV in place after a successful conversion.
    pub fn keep_intermediate(mut self, keep: bool) -> Self {
        self.keep_intermediate = keep;
        self
    }

    /// Suppress progress lines on stdout. Cleanup failures are still reported.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Convert `csv_path` into `xlsx_path`, then clean up `csv_path`.
    ///
    /// Returns the number of data rows written and the cleanup outcome.
    pub fn run(&self, csv_path: &Path, xlsx_path: &Path) -> ConvertResult<(usize, Cleanup)> {
        let table = Table::load(csv_path)?;
        write_xlsx(&table, xlsx_path)?;

        info!(xlsx = %xlsx_path.display(), rows = table.len(), "workbook written");
        if !self.quiet {
            output::print_success(&format!(
                "Output written to Excel sheet {}",
                xlsx_path.display()
            ));
        }

        let cleanup = if self.keep_intermediate {
            debug!(csv = %csv_path.display(), "keeping intermediate file");
            if !self.quiet {
                output::print_info(&format!("Keeping {}", csv_path.display()));
            }
            Cleanup::Kept
        } else {
            remove_intermediate(csv_path, self.quiet)
        };

        Ok((table.len(), cleanup))
    }
}

/// Write `table` as a one-sheet workbook at `path`.
///
/// Column 0 holds the row index under a blank header; the table's columns
/// follow. Numeric columns are written as numbers, empty cells are skipped.
pub fn write_xlsx(table: &Table, path: &Path) -> ConvertResult<()> {
    if table.len() >= MAX_SHEET_ROWS {
        return Err(ConvertError::TooManyRows(table.len()));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, label) in table.headers().iter().enumerate() {
        worksheet.write_string(0, column(col), label)?;
    }

    let kinds = table.column_kinds();
    for (index, row) in table.rows().iter().enumerate() {
        let sheet_row = (index + 1) as u32;
        worksheet.write_number(sheet_row, 0, index as f64)?;

        for (col, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let number = match kinds.get(col) {
                Some(ColumnKind::Number) => parse_number(cell),
                _ => None,
            };
            match number {
                Some(n) => worksheet.write_number(sheet_row, column(col), n)?,
                None => worksheet.write_string(sheet_row, column(col), cell)?,
            };
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Sheet column for table column `col`, shifted past the index column.
fn column(col: usize) -> u16 {
    (col + 1) as u16
}

/// Delete the intermediate file, reporting rather than propagating failure.
pub fn remove_intermediate(path: &Path, quiet: bool) -> Cleanup {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(csv = %path.display(), "intermediate file removed");
            if !quiet {
                output::print_removed(path);
            }
            Cleanup::Removed
        }
        Err(e) => {
            warn!(csv = %path.display(), error = %e, "failed to remove intermediate file");
            output::print_error(&format!("Error deleting {}: {}", path.display(), e));
            Cleanup::Failed(e.to_string())
        }
    }
}
