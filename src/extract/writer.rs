//! Incremental CSV writer for flat records.

use crate::error::{ExtractError, ExtractResult};
use crate::types::FlatRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the fixed header once, then one row per record as it arrives.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl RecordWriter<File> {
    /// Create (or truncate) a CSV file at `path`.
    pub fn create(path: &Path) -> ExtractResult<Self> {
        let file = File::create(path)?;
        Self::new(file)
    }
}

impl<W: Write> RecordWriter<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(writer: W) -> ExtractResult<Self> {
        let mut inner = csv::Writer::from_writer(writer);
        inner.write_record(FlatRecord::HEADER)?;
        Ok(Self { inner, rows: 0 })
    }

    /// Append one record.
    pub fn write(&mut self, record: &FlatRecord) -> ExtractResult<()> {
        self.inner.write_record(record.to_row())?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> ExtractResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| ExtractError::Io(e.into_error()))
    }
}
