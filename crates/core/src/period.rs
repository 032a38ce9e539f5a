// SPDX-License-Identifier: MIT

//!
//! Period strings ("2020 - 2022", "March 2021 - Present") and the dates they
//! describe
//!

use crate::{Clock, Date, Month};
use chrono::{DateTime, NaiveDate};
use log::{trace, warn};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Separates the start and the end of a period string
const SEPARATOR: &str = " - ";

/// Marks an open-ended period
const PRESENT: &str = "present";

/// A word and a 4-digit year, e.g. `March 2020`
static MONTH_AND_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+(\d{4})$").expect("valid month & year regex"));

/// Full month names, indexed by `month - 1`
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Formats tried (in order) when a bound is neither a year nor a month & year
const GENERIC_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// The dates a period string describes
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPeriod {
    /// When the period starts
    pub start: Date,

    /// When the period ends (today if it's ongoing).  Never before `start`.
    pub end: Date,

    /// Whole months between `start` and `end` (days are ignored)
    pub duration: i64,
}

/// Parse a period string such as `"2020 - 2022"` or `"Jan 2021 - Present"`.
///
/// This never fails.  Any bound that can't be understood resolves to the
/// clock's date, as does a missing end.  An end before the start is clamped to
/// the start.
pub fn parse_period(period: &str, clock: &dyn Clock) -> ParsedPeriod {
    let today = clock.today();

    let (start, end) = match period.split_once(SEPARATOR) {
        Some((start, end)) => (start.trim(), Some(end.trim())),
        None => (period.trim(), None),
    };

    let start = parse_bound(start, today);
    let end = match end {
        Some(end) => parse_bound(end, today),
        None => today,
    };

    let end = if end < start {
        warn!("Period `{period}` ends before it starts, clamping the end to the start");
        start
    } else {
        end
    };

    trace!("Parsed period `{period}` as {start:?} to {end:?}");
    ParsedPeriod {
        start,
        end,
        duration: start.months_until(&end),
    }
}

/// Find the single month whose name starts with `prefix` (case-insensitive).
/// Returns `None` if no month, or more than one month, matches.
pub fn month_from_prefix(prefix: &str) -> Option<Month> {
    if prefix.is_empty() {
        return None;
    }
    let prefix = prefix.to_lowercase();
    let mut matches = MONTH_NAMES
        .iter()
        .enumerate()
        .filter(|(_, name)| name.starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some((index, _)), None) => Month::try_from(index as i64 + 1).ok(),
        _ => None,
    }
}

/// Parse one side of a period string
fn parse_bound(bound: &str, today: Date) -> Date {
    if bound.is_empty() || bound.eq_ignore_ascii_case(PRESENT) {
        return today;
    }

    if let Some(date) = parse_year(bound)
        .or_else(|| parse_month_and_year(bound))
        .or_else(|| parse_generic(bound))
    {
        return date;
    }

    warn!("Unable to parse `{bound}` as a date, using today's date instead");
    today
}

/// e.g. `2020` (1st January)
fn parse_year(bound: &str) -> Option<Date> {
    let year = four_digit_year(bound)?;
    Date::first_of_year(year).ok()
}

/// e.g. `March 2020`, `mar 2020`, `SEPT 2019` (1st of the month)
fn parse_month_and_year(bound: &str) -> Option<Date> {
    let captures = MONTH_AND_YEAR_RE.captures(bound)?;
    let month = month_from_prefix(&captures[1])?;
    let year = captures[2].parse().ok()?;
    Date::first_of_month(month, year).ok()
}

/// Anything else chrono can make sense of
fn parse_generic(bound: &str) -> Option<Date> {
    GENERIC_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(bound, format).ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{bound}-01"), "%Y-%m-%d").ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(bound)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
        .map(Into::into)
}

fn four_digit_year(text: &str) -> Option<i64> {
    if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}
