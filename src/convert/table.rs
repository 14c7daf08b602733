//! In-memory table loaded from the intermediate CSV.

use crate::error::{ConvertError, ConvertResult};
use std::io::Read;
use std::path::Path;

/// How a column's cells are written to the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-empty cell is a finite number.
    Number,
    Text,
}

/// Row- and column-indexed table. The CSV header row becomes the column labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Load a CSV file fully into memory.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let load_err = |source| ConvertError::Load {
            path: path.to_path_buf(),
            source,
        };

        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(load_err)?;
        Self::from_csv(reader).map_err(load_err)
    }

    /// Load CSV text from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        Self::from_csv(csv::ReaderBuilder::new().has_headers(true).from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, csv::Error> {
        let headers = reader.headers()?.iter().map(String::from).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(String::from).collect()))
            .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;

        Ok(Self { headers, rows })
    }

    /// Column labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, header excluded.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Infer each column's kind from its non-empty cells.
    ///
    /// A column with no non-empty cells is `Text`; it is written blank either way.
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        (0..self.headers.len())
            .map(|col| {
                let mut cells = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .filter(|cell| !cell.is_empty())
                    .peekable();

                if cells.peek().is_some() && cells.all(|cell| parse_number(cell).is_some()) {
                    ColumnKind::Number
                } else {
                    ColumnKind::Text
                }
            })
            .collect()
    }
}

/// Parse a cell as a finite number.
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|n| n.is_finite())
}
