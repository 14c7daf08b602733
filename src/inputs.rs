//! Input resolution.
//!
//! Each argument is a literal path or a wildcard pattern. Matches that are
//! regular files with the report extension are kept, in argument order.

use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Default report file extension.
pub const DEFAULT_EXTENSION: &str = "xml";

/// Expand `patterns` into report files ending in `.{extension}`.
///
/// Files matched by more than one pattern appear once per match.
pub fn resolve_inputs<S: AsRef<str>>(patterns: &[S], extension: &str) -> CliResult<Vec<PathBuf>> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matches = glob::glob(pattern).map_err(|e| CliError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let before = files.len();
        for entry in matches {
            match entry {
                Ok(path) if is_report_file(&path, &suffix) => files.push(path),
                Ok(path) => trace!(path = %path.display(), "skipping non-report match"),
                Err(e) => debug!(error = %e, "unreadable match"),
            }
        }
        debug!(pattern, matched = files.len() - before, "pattern expanded");
    }

    Ok(files)
}

fn is_report_file(path: &Path, suffix: &str) -> bool {
    path.is_file()
        && path
            .file_name()
            .map_or(false, |name| name.to_string_lossy().ends_with(suffix))
}

/// Intermediate CSV path for a workbook path: same stem, `.csv` extension.
///
/// Never equal to `output`: a workbook named `*.csv` stages through `*.tmp.csv`.
pub fn intermediate_path(output: &Path) -> PathBuf {
    let is_csv = output
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        output.with_extension("tmp.csv")
    } else {
        output.with_extension("csv")
    }
}
