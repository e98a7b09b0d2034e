//! CSV report writing.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Column order of the report.
pub const REPORT_HEADER: [&str; 4] = ["Hostname", "SN", "rtc_time", "rtc_date"];

/// Stem of the report filename; a UTC timestamp is appended per run.
const REPORT_PREFIX: &str = "fortigate_script_history";

/// One report row: a device for which extraction succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHistoryRecord {
    pub hostname: String,
    pub serial: String,
    pub rtc_time: String,
    pub rtc_date: String,
}

/// Report filename stamped with a UTC timestamp (`MMDDYY_HHMMSS`).
pub fn report_filename(now: DateTime<Utc>) -> String {
    format!("{}_{}.csv", REPORT_PREFIX, now.format("%m%d%y_%H%M%S"))
}

/// Write the report into `dir` and return its path.
///
/// One row per record, in the order they were collected. A run with zero
/// records still writes the header - an empty report is a valid result.
pub fn write_report(records: &[ScriptHistoryRecord], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_filename(Utc::now()));
    write_report_to(records, &path)?;
    Ok(path)
}

/// Write the report to an explicit path.
pub fn write_report_to(records: &[ScriptHistoryRecord], path: &Path) -> Result<()> {
    let mut out = String::new();
    out.push_str(&REPORT_HEADER.join(","));
    out.push('\n');

    for record in records {
        let cells = [
            csv_field(&record.hostname),
            csv_field(&record.serial),
            csv_field(&record.rtc_time),
            csv_field(&record.rtc_date),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    fs::write(path, out).with_context(|| format!("Failed to write report to {:?}", path))
}

/// Quote a field when it contains a separator, quote or line break;
/// embedded quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
