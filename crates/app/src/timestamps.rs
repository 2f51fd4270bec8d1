//! Stored timestamp format helpers.
//!
//! Every timestamp persisted by this crate is a UTC wall-clock string in the
//! fixed-width form `YYYY-MM-DD HH:MM:SS`. The format is zero-padded, so the
//! stored text happens to sort chronologically, but list queries still order
//! with `datetime(...)` rather than relying on that.

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};

/// strftime/strptime pattern for stored timestamps.
pub const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp as a stored UTC string.
#[must_use]
pub fn format_utc(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::UTC)
        .strftime(STORED_FORMAT)
        .to_string()
}

/// The current instant as a stored UTC string.
#[must_use]
pub fn now_utc_string() -> String {
    format_utc(Timestamp::now())
}

/// Parse a stored UTC string back into a timestamp.
///
/// # Errors
///
/// Returns an error when the value does not match [`STORED_FORMAT`].
pub fn parse_utc(value: &str) -> Result<Timestamp, jiff::Error> {
    let datetime = DateTime::strptime(STORED_FORMAT, value)?;

    Ok(datetime.to_zoned(TimeZone::UTC)?.timestamp())
}
