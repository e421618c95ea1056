//! Property tests for timestamp handling

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::temporal::{advance_past, truncate_to_micros, format_timestamp};
use proptest::prelude::*;

fn timestamp(secs: i64, nanos: u32) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, nanos).unwrap()
}

proptest! {
    #[test]
    fn advance_past_is_strictly_later(
        secs in 0i64..4_000_000_000,
        nanos in 0u32..1_000_000_000,
        offset_us in -5_000_000i64..5_000_000,
    ) {
        let previous = truncate_to_micros(timestamp(secs, nanos));
        let now = previous + Duration::microseconds(offset_us);
        prop_assert!(advance_past(previous, now) > previous);
    }

    #[test]
    fn truncation_never_moves_forward(secs in 0i64..4_000_000_000, nanos in 0u32..1_000_000_000) {
        let ts = timestamp(secs, nanos);
        let truncated = truncate_to_micros(ts);
        prop_assert!(truncated <= ts);
        prop_assert!(ts - truncated < Duration::microseconds(1));
    }

    #[test]
    fn formatted_timestamps_have_fixed_width(secs in 0i64..253_402_300_799) {
        prop_assert_eq!(format_timestamp(Some(timestamp(secs, 0))).len(), 19);
    }
}
