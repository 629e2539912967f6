//! Date helpers backing the date rules of the validation system.
//!
//! Form screens submit dates as strings; a date is considered valid when it is
//! present and parses to a point in time. "Now" always comes from a [`Clock`]
//! so callers that need deterministic results can pin it with [`FixedClock`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Source of the current instant for future/past comparisons
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Strictly after the current instant
    fn is_date_in_future(&self, date: &DateTime<Utc>) -> bool {
        *date > self.now()
    }

    /// Strictly before the current instant
    fn is_date_in_past(&self, date: &DateTime<Utc>) -> bool {
        *date < self.now()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses a submitted date string.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps
/// (read as UTC) and plain `YYYY-MM-DD` dates (midnight UTC). Surrounding
/// whitespace is ignored. Returns `None` for anything else.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
