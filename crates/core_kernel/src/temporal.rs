//! Calendar date and timestamp handling
//!
//! Policy records carry plain calendar dates (start/end of cover) and
//! UTC audit timestamps. The store keeps timestamps at microsecond
//! resolution, so timestamps produced here are truncated to match.

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};

/// Export format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Export format for audit timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats an optional date as `YYYY-MM-DD`, or an empty string when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Formats an optional timestamp as `YYYY-MM-DD HH:MM:SS`, or an empty string when absent
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Truncates a timestamp to whole microseconds
pub fn truncate_to_micros(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    let micros = timestamp.nanosecond() / 1_000 * 1_000;
    timestamp.with_nanosecond(micros).unwrap_or(timestamp)
}

/// Current time at store resolution
pub fn now_micros() -> DateTime<Utc> {
    truncate_to_micros(Utc::now())
}

/// Returns `now`, or one microsecond past `previous` if `now` does not move forward
///
/// Used to refresh modification timestamps so that every mutation is
/// strictly later than the one before it, even within one clock tick.
pub fn advance_past(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let now = truncate_to_micros(now);
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
