//! Named conversions between wire time values and typed times.
//!
//! The platform encodes time in several units depending on the field, so
//! every field goes through exactly one of these functions:
//!
//! | Conversion | Fields |
//! |---|---|
//! | [`parse_iso8601`] | most timestamps (`joined_at`, `edited_timestamp`, …) |
//! | [`unix_millis`] | activity `created_at` and activity timestamps |
//! | [`unix_seconds`] | typing start `timestamp` |
//! | [`seconds`] | `afk_timeout`, `rate_limit_per_user`, invite `max_age` |
//! | [`milliseconds`] | session start limit `reset_after` |
//! | [`days`] | integration `expire_grace_period`, prune `delete_member_days` |

use crate::error::FactoryError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;

const SECONDS_PER_DAY: u64 = 86_400;

/// Parse an ISO 8601 timestamp with an offset, normalized to UTC.
///
/// Both forms the platform emits are accepted: with fractional seconds
/// (`2021-01-01T01:01:01.010000+00:00`) and without
/// (`2021-01-01T01:01:01+00:00`).
///
/// # Errors
///
/// Returns a [`SchemaViolation`] if the text isn't an ISO 8601 datetime.
///
/// [`SchemaViolation`]: crate::error::FactoryErrorType::SchemaViolation
pub fn parse_iso8601(text: &str) -> Result<DateTime<Utc>, FactoryError> {
    DateTime::parse_from_rfc3339(text)
        .map(|datetime| datetime.with_timezone(&Utc))
        .map_err(FactoryError::invalid_value)
}

/// Format a timestamp the way outgoing payloads carry it.
///
/// Microsecond precision is kept so [`parse_iso8601`] reads back the same
/// instant.
pub fn format_iso8601(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Convert milliseconds since the Unix epoch.
///
/// # Errors
///
/// Returns a [`SchemaViolation`] if the value is out of range.
///
/// [`SchemaViolation`]: crate::error::FactoryErrorType::SchemaViolation
pub fn unix_millis(millis: i64) -> Result<DateTime<Utc>, FactoryError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| FactoryError::invalid_value(format!("{millis}ms is out of range")))
}

/// Convert seconds since the Unix epoch.
///
/// # Errors
///
/// Returns a [`SchemaViolation`] if the value is out of range.
///
/// [`SchemaViolation`]: crate::error::FactoryErrorType::SchemaViolation
pub fn unix_seconds(seconds: i64) -> Result<DateTime<Utc>, FactoryError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| FactoryError::invalid_value(format!("{seconds}s is out of range")))
}

/// A duration sent as whole seconds.
pub const fn seconds(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

/// A duration sent as whole milliseconds.
pub const fn milliseconds(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// A duration sent as whole days.
pub const fn days(days: u64) -> Duration {
    Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY))
}
