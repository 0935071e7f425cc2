//! Timestamp formatting.

use chrono::{DateTime, Offset, TimeZone};

/// Formats `value` as ISO-8601 with seconds precision, using `Z` for a
/// zero offset and the numeric offset otherwise.
#[must_use]
pub fn datetime_as_iso<Tz: TimeZone>(value: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if value.offset().fix().local_minus_utc() == 0 {
        value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S%z").to_string()
    }
}
