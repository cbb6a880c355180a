//! Persists the reduced statistics as one JSON document.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::stats::QuantileReport;

/// Writes `report` to `path` as pretty-printed JSON, created or truncated
/// whole. Pure serialization; the numbers are taken as-is.
///
/// # Errors
///
/// Returns `ReportError::Serialize` when the document cannot be encoded and
/// `ReportError::WriteFailure` on I/O failure.
pub fn write_report(path: &Path, report: &QuantileReport) -> ReportResult<()> {
    let json = serde_json::to_vec_pretty(report)
        .map_err(|err| ReportError::Serialize { source: err })?;
    let file = File::create(path).map_err(|err| ReportError::WriteFailure {
        path: path.to_path_buf(),
        source: err,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&json)
        .and_then(|()| writer.flush())
        .map_err(|err| ReportError::WriteFailure {
            path: path.to_path_buf(),
            source: err,
        })
}
