//! # Time Utilities
//!
//! Utilities for time formatting using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// File-name safe ISO-8601 stamp with millisecond precision.
///
/// Same shape as a JavaScript `toISOString()` with `:` and `.` replaced by `-`,
/// e.g. `2026-10-16T09-05-03-042Z`.
pub fn export_stamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_stamp() {
        let time = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 3).unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(export_stamp(time), "2026-10-16T09-05-03-042Z");
    }

    #[test]
    fn test_export_stamp_has_no_separators_unsafe_for_files() {
        let stamp = export_stamp(now_utc());
        assert!(!stamp.contains(':'));
        assert!(!stamp.contains('.'));
    }
}
