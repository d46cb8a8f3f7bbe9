//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format a byte count with binary units.
///
/// # Example output
/// `512 B`, `1.5 KB`, `20.0 MB`
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a timestamp in local time, or "N/A"
pub fn format_local<Tz: TimeZone>(time: Option<DateTime<Tz>>) -> String {
    match time {
        Some(t) => t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

/// Describe how long until `expires_at`.
///
/// # Example output
/// `expires in 23h 59m`, `expired 2h 5m ago`
pub fn format_expiry(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = expires_at.signed_duration_since(now);
    let minutes = remaining.num_minutes().abs();
    let span = format!("{}h {}m", minutes / 60, minutes % 60);

    if remaining.num_seconds() >= 0 {
        format!("expires in {}", span)
    } else {
        format!("expired {} ago", span)
    }
}
