//! Canonical `YYYY-MM-DD` date strings.

use chrono::NaiveDate;

use crate::error::{SharedCalError, SharedCalResult};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a local calendar date as `YYYY-MM-DD`, zero padded.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string typed by a user.
///
/// Records are never re-validated on load; this is only for input that is
/// about to become a record.
pub fn parse_iso_date(s: &str) -> SharedCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT).map_err(|_| {
        SharedCalError::Validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}
