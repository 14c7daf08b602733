//! End-to-end conversion: reports → intermediate CSV → workbook.

use crate::convert::{Cleanup, Converter};
use crate::error::CliResult;
use crate::extract::Extractor;
use crate::inputs::intermediate_path;
use crate::output;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub hosts: usize,
    pub rows: usize,
    pub csv_path: PathBuf,
    pub xlsx_path: PathBuf,
    pub cleanup: Cleanup,
}

/// Conversion pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    keep_intermediate: bool,
    quiet: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the intermediate CSV in place.
    pub fn keep_intermediate(mut self, keep: bool) -> Self {
        self.keep_intermediate = keep;
        self
    }

    /// Suppress progress lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Convert `documents` into a workbook at `output`.
    ///
    /// The intermediate CSV sits next to `output`; see [`intermediate_path`].
    pub fn run<P: AsRef<Path>>(&self, documents: &[P], output: &Path) -> CliResult<RunSummary> {
        let csv_path = intermediate_path(output);
        info!(
            documents = documents.len(),
            csv = %csv_path.display(),
            xlsx = %output.display(),
            "starting conversion"
        );

        let extractor = if self.quiet {
            Extractor::new().quiet()
        } else {
            Extractor::new()
        };
        let extracted = extractor.run(documents, &csv_path)?;

        if !self.quiet {
            output::print_success(&format!(
                "Conversion complete. CSV file saved as {}",
                csv_path.display()
            ));
        }

        let converter = Converter::new().keep_intermediate(self.keep_intermediate);
        let converter = if self.quiet {
            converter.quiet()
        } else {
            converter
        };
        let (rows, cleanup) = converter.run(&csv_path, output)?;

        Ok(RunSummary {
            documents: extracted.documents,
            hosts: extracted.hosts,
            rows,
            csv_path,
            xlsx_path: output.to_path_buf(),
            cleanup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{Table, SHEET_NAME};
    use crate::error::{CliError, ExtractError};
    use crate::inputs::resolve_inputs;
    use crate::types::FlatRecord;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use std::fs;
    use tempfile::TempDir;

    const FULL_AND_PARTIAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap">
  <host>
    <address addr="192.168.1.10" addrtype="ipv4"/>
    <hostnames><hostname name="files.lan" type="PTR"/></hostnames>
    <ports>
      <port protocol="tcp" portid="445">
        <state state="open"/>
        <service name="microsoft-ds" product="Samba smbd" version="4.6.2" extrainfo="workgroup: WORKGROUP"/>
      </port>
      <port protocol="tcp" portid="8080">
        <state state="open"/>
        <service name="http-proxy" product="Squid http proxy" extrainfo="caching"/>
      </port>
    </ports>
  </host>
</nmaprun>
"#;

    const PORTLESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<nmaprun scanner="nmap">
  <host>
    <address addr="192.168.1.11" addrtype="ipv4"/>
    <hostnames><hostname name="printer.lan"/></hostnames>
  </host>
</nmaprun>
"#;

    fn setup() -> (TempDir, Vec<PathBuf>, PathBuf) {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.xml");
        let second = dir.path().join("second.xml");
        fs::write(&first, FULL_AND_PARTIAL).unwrap();
        fs::write(&second, PORTLESS).unwrap();
        fs::write(dir.path().join("readme.txt"), "not a report").unwrap();
        let output = dir.path().join("output.xlsx");
        (dir, vec![first, second], output)
    }

    #[test]
    fn test_two_document_scenario() {
        let (dir, _, output) = setup();
        let pattern = format!("{}/*", dir.path().display());
        let documents = resolve_inputs(&[pattern], "xml").unwrap();
        assert_eq!(documents.len(), 2);

        let summary = Pipeline::new().quiet(true).run(&documents, &output).unwrap();
        assert_eq!(summary.documents, 2);
        assert_eq!(summary.hosts, 2);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.cleanup, Cleanup::Removed);
        assert!(!summary.csv_path.exists());
        assert!(output.exists());

        let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.get_size(), (3, 8));
        // Version column of the second row
        assert_eq!(range.get_value((2, 6)), Some(&Data::Empty));
        assert_eq!(
            range.get_value((2, 4)),
            Some(&Data::String("http-proxy".to_string()))
        );
    }

    #[test]
    fn test_intermediate_round_trip() {
        let (_dir, documents, output) = setup();

        let summary = Pipeline::new()
            .quiet(true)
            .keep_intermediate(true)
            .run(&documents, &output)
            .unwrap();
        assert_eq!(summary.cleanup, Cleanup::Kept);

        let table = Table::load(&summary.csv_path).unwrap();
        assert_eq!(table.headers(), FlatRecord::HEADER);
        assert_eq!(
            table.rows(),
            [
                vec![
                    "192.168.1.10",
                    "files.lan",
                    "445",
                    "microsoft-ds",
                    "Samba smbd",
                    "4.6.2",
                    "workgroup: WORKGROUP"
                ],
                vec![
                    "192.168.1.10",
                    "files.lan",
                    "8080",
                    "http-proxy",
                    "Squid http proxy",
                    "",
                    "caching"
                ],
            ]
        );
    }

    #[test]
    fn test_no_documents_still_produces_outputs() {
        let (_dir, _, output) = setup();
        let documents: Vec<PathBuf> = Vec::new();

        let summary = Pipeline::new().quiet(true).run(&documents, &output).unwrap();
        assert_eq!(summary.rows, 0);
        assert!(output.exists());
    }

    #[test]
    fn test_csv_named_output_survives_cleanup() {
        let (dir, documents, _) = setup();
        let output = dir.path().join("report.csv");

        let summary = Pipeline::new().quiet(true).run(&documents, &output).unwrap();
        assert_ne!(summary.csv_path, output);
        assert_eq!(summary.cleanup, Cleanup::Removed);
        assert!(!summary.csv_path.exists());
        assert!(output.exists());

        let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.get_size(), (3, 8));
    }

    #[test]
    fn test_extraction_failure_skips_conversion() {
        let (dir, mut documents, output) = setup();
        let broken = dir.path().join("broken.xml");
        fs::write(&broken, "<nmaprun><host></nmaprun>").unwrap();
        documents.insert(0, broken);

        let err = Pipeline::new().quiet(true).run(&documents, &output).unwrap_err();
        assert!(matches!(err, CliError::Extract(ExtractError::Parse { .. })));
        assert!(!output.exists());
    }
}
