//! Display helpers for API timestamps.
//!
//! The API reports times as epoch milliseconds.

use chrono::{DateTime, Utc};

/// Placeholder shown when a timestamp is missing.
pub const MISSING: &str = "-";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render epoch milliseconds as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Missing or out-of-range values render as `-`.
pub fn format_date(epoch_ms: Option<i64>) -> String {
    epoch_ms
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map_or_else(|| MISSING.to_string(), |dt| dt.format(DISPLAY_FORMAT).to_string())
}

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
