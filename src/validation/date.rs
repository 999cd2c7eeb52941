//! Desired appointment date validation.
//!
//! Dates are entered as `dd/mm/yyyy`. Checks run in a fixed order and the
//! first failure wins:
//!
//! 1. empty value: `Required`
//! 2. not matching the pattern: `InvalidDateFormat`
//! 3. day/month/year not forming a real calendar day (31/04, 29/02 in a
//!    common year, month 13, day 00): `InvalidCalendarDate`
//! 4. earlier than `today`: `DateInPast`
//!
//! Comparison is at day granularity; today itself is accepted.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use super::violation::{ValidationOutcome, ViolationKind};

/// Display format used for dates throughout the form.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("valid date regex")
});

/// Split a `dd/mm/yyyy` string into its numeric parts without range checks.
fn parse_parts(value: &str) -> Option<(u32, u32, i32)> {
    let caps = DATE_RE.captures(value)?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    Some((day, month, year))
}

/// Parse a `dd/mm/yyyy` string into a calendar date.
///
/// Returns `None` for anything the validator would reject as a format or
/// calendar error.
pub fn parse_desired_date(value: &str) -> Option<NaiveDate> {
    let (day, month, year) = parse_parts(value)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    // from_ymd_opt never normalizes, but keep the round-trip explicit
    (date.day() == day && date.month() == month && date.year() == year).then_some(date)
}

/// Validate a desired date against an explicit `today`.
pub fn validate_desired_date(value: &str, today: NaiveDate) -> ValidationOutcome {
    if value.is_empty() {
        return ViolationKind::Required.into();
    }

    if parse_parts(value).is_none() {
        return ViolationKind::InvalidDateFormat.into();
    }

    let Some(date) = parse_desired_date(value) else {
        return ViolationKind::InvalidCalendarDate.into();
    };

    if date < today {
        return ViolationKind::DateInPast.into();
    }

    ValidationOutcome::Valid
}

/// Format a date the way the form expects it to be typed.
pub fn format_desired_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
