//! Relative time labels ("3 hours ago")

use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;

/// Label for timestamps chrono cannot represent
pub const UNKNOWN_TIME: &str = "unknown date";

/// Describe `ts` (unix seconds) relative to `now`
pub fn from_now(ts: i64, now: DateTime<Utc>) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(released) => HumanTime::from(released - now).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap()
    }

    fn ago(secs: i64) -> String {
        from_now(now().timestamp() - secs, now())
    }

    #[test]
    fn test_now() {
        assert_eq!(ago(0), "now");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(ago(3 * 3600), "3 hours ago");
        assert_eq!(ago(24 * 3600), "a day ago");
        assert_eq!(ago(5 * 86400), "5 days ago");
    }

    #[test]
    fn test_years() {
        assert_eq!(ago(400 * 86400), "a year ago");
    }

    #[test]
    fn test_future() {
        assert_eq!(from_now(now().timestamp() + 7200, now()), "in 2 hours");
    }

    #[test]
    fn test_out_of_range_timestamps() {
        assert_eq!(from_now(i64::MIN, now()), UNKNOWN_TIME);
        assert_eq!(from_now(i64::MAX, now()), UNKNOWN_TIME);
    }

    #[test]
    fn test_extreme_timestamp_from_json() {
        let entry: crate::model::ChangelogEntry =
            serde_json::from_str(r#"{"version":"1.0.0","ts":-9223372036854775808}"#).unwrap();
        assert_eq!(from_now(entry.ts, now()), UNKNOWN_TIME);
    }
}
