// SPDX-License-Identifier: MIT

//!
//! The Folio date type
//!

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Abbreviated month names, indexed by `month - 1`
const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year is outside of what can be represented
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// Each field is valid on its own but the date doesn't exist (e.g. 30th
    /// of February)
    #[error("{year}-{month:02}-{day:02} is not a calendar date")]
    NotACalendarDate { day: u8, month: u8, year: i32 },

    /// Not a `yyyy-mm-dd` date
    #[error("`{0}` is not a yyyy-mm-dd date")]
    Unparsable(String),
}

/// The Folio day type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The Folio month type (1 = January)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The Folio year type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero based index (January = 0), handy for lookup tables
    pub fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }

    /// e.g. `Jan`
    pub fn short_name(&self) -> &'static str {
        SHORT_MONTH_NAMES[self.index()]
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=31).contains(&value) {
            Ok(Day(value as u8))
        } else {
            Err(DateError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let year = i32::try_from(value).map_err(|_| DateError::InvalidYear(value))?;
        // Anything chrono can hold is fine
        if NaiveDate::from_ymd_opt(year, 1, 1).is_some() {
            Ok(Year(year))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

/// The Folio date type.  Always a full calendar date.
///
/// Field order matters: the derived ordering compares year, then month, then
/// day.
#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

impl Date {
    /// Create a new [`Date`] if the result will be valid
    pub fn from(day: i64, month: i64, year: i64) -> Result<Date, DateError> {
        let day = Day::try_from(day)?;
        let month = Month::try_from(month)?;
        let year = Year::try_from(year)?;
        match NaiveDate::from_ymd_opt(year.0, u32::from(month.0), u32::from(day.0)) {
            Some(_) => Ok(Date { year, month, day }),
            None => Err(DateError::NotACalendarDate {
                day: day.0,
                month: month.0,
                year: year.0,
            }),
        }
    }

    /// 1st January of the given year
    pub fn first_of_year(year: i64) -> Result<Date, DateError> {
        Date::from(1, 1, year)
    }

    /// 1st of the given month
    pub fn first_of_month(month: Month, year: i64) -> Result<Date, DateError> {
        Date::from(1, i64::from(month.0), year)
    }

    /// Get the [`Date`]'s day
    pub fn day(&self) -> Day {
        self.day
    }

    /// Get the [`Date`]'s month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Whole months from `self` until `other`, ignoring the day of the month.
    /// Negative if `other` is in an earlier month.
    pub fn months_until(&self, other: &Date) -> i64 {
        let year_diff = i64::from(other.year.0) - i64::from(self.year.0);
        let month_diff = i64::from(other.month.0) - i64::from(self.month.0);
        year_diff * 12 + month_diff
    }

    /// e.g. 1 Jan 2025 format
    pub fn as_long_date_format(&self) -> String {
        format!("{} {} {}", self.day, self.month.short_name(), self.year)
    }

    /// yyyy-mm-dd format
    pub fn as_iso_format(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year.0, self.month.0, self.day.0)
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        // chrono guarantees each field is in range
        Date {
            year: Year(value.year()),
            month: Month(value.month() as u8),
            day: Day(value.day() as u8),
        }
    }
}

impl From<Date> for NaiveDate {
    fn from(value: Date) -> Self {
        NaiveDate::from_ymd_opt(
            value.year.0,
            u32::from(value.month.0),
            u32::from(value.day.0),
        )
        .unwrap_or_default()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parse a `yyyy-mm-dd` date
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Into::into)
            .map_err(|_| DateError::Unparsable(s.to_string()))
    }
}

#[derive(Deserialize)]
struct RawDate {
    day: i64,
    month: i64,
    year: i64,
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_date = RawDate::deserialize(deserializer)?;
        Date::from(raw_date.day, raw_date.month, raw_date.year).map_err(serde::de::Error::custom)
    }
}
