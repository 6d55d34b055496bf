//! Lookup reports.
//!
//! One plain-text file per saved lookup, named
//! `geo_report_<ip>_<YYYYMMDD_HHMMSS>.txt`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;

use crate::config::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::error_handling::LookupError;
use crate::utils::write_atomically;

/// File name of the report for `ip` saved at `timestamp`.
///
/// Second resolution: two saves for the same IP within one second share a
/// name and the later one replaces the earlier.
pub fn report_file_name(ip: &str, timestamp: &DateTime<Local>) -> String {
    format!(
        "{REPORT_FILE_PREFIX}_{ip}_{}.txt",
        timestamp.format(REPORT_TIMESTAMP_FORMAT)
    )
}

/// Writes `summary` to a new report in `folder`, creating the folder if needed.
///
/// # Errors
///
/// Returns `LookupError::ReportWriteError` with the target path if the folder
/// cannot be created or the file cannot be written.
pub fn write_report(
    folder: &Path,
    ip: &str,
    summary: &str,
    timestamp: DateTime<Local>,
) -> Result<PathBuf, LookupError> {
    let path = folder.join(report_file_name(ip, &timestamp));
    write_atomically(&path, summary.as_bytes()).map_err(|e| LookupError::ReportWriteError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    info!("Saved report to {}", path.display());
    Ok(path)
}
