use chrono::{DateTime, FixedOffset};

/// Wall clock as `HH:MM:SS` in the reading's own offset.
pub fn format_clock(now: &DateTime<FixedOffset>) -> String {
    now.format("%H:%M:%S").to_string()
}
