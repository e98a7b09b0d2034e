//! Extraction of structured timing fields from script execution logs.
//!
//! A script run log is free-form console output captured by the controller.
//! Three fields come out of it: the device hostname printed after the run
//! banner, and the `rtc_time` / `rtc_date` values echoed by the script.
//! Everything here is pure - no I/O, no logging.

use crate::fmg::TaskHistory;

/// Banner preceding the device prompt in a run log.
const RUN_BANNER: &str = "Starting log (Run on device)\n\n";

/// Hostname used when the run banner is missing from the log.
const UNKNOWN_HOSTNAME: &str = "Unknown";

/// Fields extracted from one script run log.
///
/// `hostname` is never empty (it falls back to `"Unknown"`), so a returned
/// value always means "extraction succeeded" even when the time or date
/// lines were absent and those fields are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRunFields {
    pub hostname: String,
    pub rtc_time: String,
    pub rtc_date: String,
}

/// Find the first history entry for `script_name` and extract its fields.
///
/// The name must match exactly - a substring or superstring of the requested
/// name is a different script. `None` means this device has no matching run
/// and is skipped; it is not an error.
pub fn extract_script_run(history: &TaskHistory, script_name: &str) -> Option<ScriptRunFields> {
    let entry = history
        .entries()
        .iter()
        .find(|e| e.script_name.as_deref() == Some(script_name))?;

    let content = entry.content.as_deref().unwrap_or("");
    Some(parse_run_log(content))
}

/// Parse one run log into its three fields.
fn parse_run_log(content: &str) -> ScriptRunFields {
    let (rtc_time, rtc_date) = rtc_fields(content);
    ScriptRunFields {
        hostname: hostname_from_banner(content),
        rtc_time,
        rtc_date,
    }
}

/// The hostname sits between the run banner and the next double space
/// (the device prompt pads it with two spaces). Without the banner the
/// hostname is unknowable; without the double space the rest of the log is
/// taken and trimmed.
fn hostname_from_banner(content: &str) -> String {
    let Some(banner_at) = content.find(RUN_BANNER) else {
        return UNKNOWN_HOSTNAME.to_string();
    };

    let after = &content[banner_at + RUN_BANNER.len()..];
    let end = after.find("  ").unwrap_or(after.len());
    after[..end].trim().to_string()
}

/// Scan every line for `rtc_time` / `rtc_date`; the last match of each wins.
///
/// Absent fields stay `""` - that is a valid answer, not an error. Lines
/// where the value cannot be read (no separator, truncated time) are
/// skipped, so a mangled line never becomes wrong data.
fn rtc_fields(content: &str) -> (String, String) {
    let mut time = String::new();
    let mut date = String::new();

    for line in content.lines() {
        if line.contains("rtc_time") {
            if let Some(value) = time_value(line) {
                time = value;
            }
        }
        if line.contains("rtc_date") {
            if let Some(value) = date_value(line) {
                date = value;
            }
        }
    }

    (time, date)
}

/// Read the `H:M:S` value of an `rtc_time` line.
///
/// The value's separator collides with the key/value separator, so the line
/// cannot just be split on `:`. Scan instead: after the colon that follows
/// the key, take the run of digits and colons and keep its first three
/// groups, re-joined with `:`. Fewer than three groups means the time is
/// truncated and the line is skipped.
fn time_value(line: &str) -> Option<String> {
    let after_key = &line[line.find("rtc_time")? + "rtc_time".len()..];
    let value = after_key[after_key.find(':')? + 1..].trim_start();

    let end = value
        .find(|c: char| !c.is_ascii_digit() && c != ':')
        .unwrap_or(value.len());
    let mut groups = value[..end].split(':');

    match (groups.next(), groups.next(), groups.next()) {
        (Some(h), Some(m), Some(s)) if !h.is_empty() && !m.is_empty() && !s.is_empty() => {
            Some(format!("{}:{}:{}", h, m, s))
        }
        _ => None,
    }
}

/// The date value is the line's second colon-delimited segment, trimmed
/// (dates contain no colon, so no reassembly is needed).
fn date_value(line: &str) -> Option<String> {
    line.split(':').nth(1).map(|s| s.trim().to_string())
}
