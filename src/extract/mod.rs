//! Extractor: report documents in, flat CSV rows out.
//!
//! Each `<host>` contributes one row per `<port>` beneath it. Rows are
//! written as they are found, in input order, then host order, then port
//! order.
//!
//! A host without an `<address>` or `<hostname>`, or a port without a
//! `<service>`, stops the run. A host with no ports contributes nothing.
//! Attributes missing from an element that does exist become empty cells.

mod document;
mod writer;

pub use document::{attr, find_all, find_first, ReportDocument};
pub use writer::RecordWriter;

use crate::error::{ExtractError, ExtractResult};
use crate::output;
use crate::types::{FlatRecord, ServiceInfo};
use roxmltree::Node;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Counts gathered during one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub documents: usize,
    pub hosts: usize,
    pub rows: usize,
}

/// Walks report documents and writes their records.
#[derive(Debug, Clone)]
pub struct Extractor {
    echo_paths: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Create an extractor that echoes each document path to stdout.
    pub fn new() -> Self {
        Self { echo_paths: true }
    }

    /// Do not echo document paths.
    pub fn quiet(mut self) -> Self {
        self.echo_paths = false;
        self
    }

    /// Extract every document into a new CSV file at `csv_path`.
    ///
    /// The file is created (or truncated) before the first document is read.
    /// On error, rows already written stay in the file.
    pub fn run<P: AsRef<Path>>(
        &self,
        documents: &[P],
        csv_path: &Path,
    ) -> ExtractResult<ExtractSummary> {
        let mut writer = RecordWriter::create(csv_path)?;
        let summary = self.run_into(documents, &mut writer)?;
        writer.finish()?;

        info!(
            csv = %csv_path.display(),
            documents = summary.documents,
            rows = summary.rows,
            "extraction complete"
        );
        Ok(summary)
    }

    /// Extract every document into an existing writer.
    pub fn run_into<P: AsRef<Path>, W: Write>(
        &self,
        documents: &[P],
        writer: &mut RecordWriter<W>,
    ) -> ExtractResult<ExtractSummary> {
        let mut summary = ExtractSummary::default();

        for path in documents {
            let path = path.as_ref();
            if self.echo_paths {
                output::print_document(path);
            }

            let text = fs::read_to_string(path).map_err(|source| ExtractError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let report = ReportDocument::parse(path, &text)?;

            summary.hosts += write_report(&report, writer)?;
            summary.documents += 1;
        }

        summary.rows = writer.rows();
        Ok(summary)
    }
}

/// Write one record per (host, port) pair of `report`. Returns the number of hosts seen.
pub fn write_report<W: Write>(
    report: &ReportDocument<'_>,
    writer: &mut RecordWriter<W>,
) -> ExtractResult<usize> {
    let mut hosts = 0;

    for host in report.hosts() {
        hosts += 1;
        let address = report.require(host, "host", "address")?;
        let hostname = report.require(host, "host", "hostname")?;
        let host_addr = attr(address, "addr");
        let host_name = attr(hostname, "name");

        let mut ports = 0;
        for port in find_all(host, "port") {
            let service = report.require(port, "port", "service")?;
            let record = FlatRecord {
                host: host_addr.clone(),
                hostname: host_name.clone(),
                port: attr(port, "portid"),
                service: service_info(service),
            };
            writer.write(&record)?;
            ports += 1;
        }

        debug!(
            path = %report.path().display(),
            host = host_addr.as_deref().unwrap_or(""),
            ports,
            "host processed"
        );
    }

    Ok(hosts)
}

fn service_info(service: Node<'_, '_>) -> ServiceInfo {
    ServiceInfo {
        name: attr(service, "name"),
        product: attr(service, "product"),
        version: attr(service, "version"),
        extra_info: attr(service, "extrainfo"),
    }
}
