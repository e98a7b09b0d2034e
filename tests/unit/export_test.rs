//! Unit tests for the CSV report writer.

use std::fs;

use fmghist::export::{write_report, write_report_to};
use fmghist::ScriptHistoryRecord;
use tempfile::TempDir;

fn record(hostname: &str, serial: &str, time: &str, date: &str) -> ScriptHistoryRecord {
    ScriptHistoryRecord {
        hostname: hostname.to_string(),
        serial: serial.to_string(),
        rtc_time: time.to_string(),
        rtc_date: date.to_string(),
    }
}

#[test]
fn report_has_header_and_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");
    let records = vec![
        record("FGT-A", "SN1", "08:00:00", "01/02/2024"),
        record("FGT-B", "SN2", "09:30:01", "01/03/2024"),
    ];

    write_report_to(&records, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "Hostname,SN,rtc_time,rtc_date");
    assert_eq!(lines[1], "FGT-A,SN1,08:00:00,01/02/2024");
    assert_eq!(lines[2], "FGT-B,SN2,09:30:01,01/03/2024");
    assert_eq!(lines.len(), 3);
}

#[test]
fn empty_run_still_writes_the_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");

    write_report_to(&[], &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Hostname,SN,rtc_time,rtc_date\n");
}

#[test]
fn awkward_fields_survive_quoting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.csv");
    let records = vec![record("FGT,A", "SN\"1\"", "08:00:00", "01/02/2024")];

    write_report_to(&records, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"FGT,A\",\"SN\"\"1\"\"\",08:00:00"));
}

#[test]
fn write_report_stamps_the_filename() {
    let dir = TempDir::new().unwrap();

    let path = write_report(&[], dir.path()).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("fortigate_script_history_"));
    assert!(name.ends_with(".csv"));
    assert!(path.exists());
}
