//! Date arithmetic, formatting, and comparison helpers.
//!
//! Every helper accepts chrono values and ISO-8601 strings interchangeably via
//! [`IntoUtcDate`], never mutates its input, and signals unparseable input with
//! `None` (or `false` for the predicates).

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Conversion into a UTC timestamp, accepted by every helper in this module.
///
/// Strings parse as RFC 3339 timestamps or plain `YYYY-MM-DD` dates; bare dates
/// are anchored at midnight UTC.
pub trait IntoUtcDate {
    fn into_utc(self) -> Option<DateTime<Utc>>;
}

impl IntoUtcDate for DateTime<Utc> {
    fn into_utc(self) -> Option<DateTime<Utc>> {
        Some(self)
    }
}

impl IntoUtcDate for NaiveDate {
    fn into_utc(self) -> Option<DateTime<Utc>> {
        Some(self.and_hms_opt(0, 0, 0)?.and_utc())
    }
}

impl IntoUtcDate for &str {
    fn into_utc(self) -> Option<DateTime<Utc>> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(self) {
            return Some(timestamp.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(self, "%Y-%m-%d").ok()?.into_utc()
    }
}

impl IntoUtcDate for String {
    fn into_utc(self) -> Option<DateTime<Utc>> {
        self.as_str().into_utc()
    }
}

impl IntoUtcDate for &String {
    fn into_utc(self) -> Option<DateTime<Utc>> {
        self.as_str().into_utc()
    }
}

/// Parse a date input to a UTC timestamp.
pub fn parse_date(input: impl IntoUtcDate) -> Option<DateTime<Utc>> {
    input.into_utc()
}

/// Add (or, with a negative count, subtract) whole days. Returns a new value;
/// month and year rollover follow the calendar.
pub fn add_days(input: impl IntoUtcDate, days: i64) -> Option<DateTime<Utc>> {
    Some(input.into_utc()? + Duration::days(days))
}

/// Format as `YYYY-MM-DD`.
pub fn to_date_string(input: impl IntoUtcDate) -> Option<String> {
    Some(input.into_utc()?.format("%Y-%m-%d").to_string())
}

/// Format for display, e.g. `Jan 30, 2026`.
pub fn to_display_string(input: impl IntoUtcDate) -> Option<String> {
    Some(input.into_utc()?.format("%b %-d, %Y").to_string())
}

/// Absolute difference in calendar days, symmetric in its arguments.
pub fn diff_in_days(a: impl IntoUtcDate, b: impl IntoUtcDate) -> Option<i64> {
    let a = a.into_utc()?.date_naive();
    let b = b.into_utc()?.date_naive();
    Some((b - a).num_days().abs())
}

/// True iff both inputs parse and fall on the same UTC calendar day.
pub fn is_same_day(a: impl IntoUtcDate, b: impl IntoUtcDate) -> bool {
    match (a.into_utc(), b.into_utc()) {
        (Some(a), Some(b)) => a.date_naive() == b.date_naive(),
        _ => false,
    }
}

/// True iff `input` falls within `[start, end]`, inclusive at both endpoints.
pub fn is_within_range(
    input: impl IntoUtcDate,
    start: impl IntoUtcDate,
    end: impl IntoUtcDate,
) -> bool {
    match (input.into_utc(), start.into_utc(), end.into_utc()) {
        (Some(input), Some(start), Some(end)) => start <= input && input <= end,
        _ => false,
    }
}
