//! Rendering and parsing of times for console output.
//!
//! Durations are shown as "HH:MM", zero-padded, rounded down to the minute;
//! negative durations render as "00:00". Timestamps are stored as epoch
//! seconds and converted through the local timezone at the display edge.

use chrono::{Duration, Local, NaiveDateTime, TimeZone};

pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Falls back to the raw epoch value for timestamps the local timezone
/// cannot represent.
pub fn format_timestamp(epoch: i64, format: &str) -> String {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| epoch.to_string())
}

/// Parses a local wall-clock string into epoch seconds. Returns `None` for
/// input that does not match the format or names a nonexistent local time.
pub fn parse_timestamp(input: &str, format: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(input, format).ok()?;
    Local.from_local_datetime(&naive).single().map(|dt| dt.timestamp())
}
