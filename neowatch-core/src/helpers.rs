///! Timestamp helpers for the close-approach dataset

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Format used by the SSD close-approach dataset, e.g. "1900-Jan-01 00:00".
const CD_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Parse a calendar-date string from the close-approach dataset.
///
/// The dataset writes times UTC, without a zone marker, so the result is a
/// naive date-time.
pub fn cd_to_datetime(calendar_date: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(calendar_date.trim(), CD_FORMAT)
        .map_err(|_| Error::BadTimestamp(calendar_date.to_string()))
}

/// Format a close-approach time for display and export, e.g. "1900-01-01 00:11".
pub fn datetime_to_str(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}
