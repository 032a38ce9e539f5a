// SPDX-License-Identifier: MIT

//!
//! Date range
//!

use folio_core::{Clock, Date, ParsedPeriod, Position};
use serde::Serialize;
use std::fmt::Debug;

/// The timeline's date range.  `total_months` is the denominator for all
/// proportional placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineRange {
    /// The earliest position start
    pub start: Date,

    /// The latest position end
    pub end: Date,

    /// Whole months from `start` to `end`.  Only 0 when there are no
    /// positions.
    pub total_months: i64,
}

impl TimelineRange {
    /// The range used when there's nothing to show
    pub fn empty(today: Date) -> Self {
        TimelineRange {
            start: today,
            end: today,
            total_months: 0,
        }
    }

    /// Whether there's nothing to lay out (dividing by `total_months` isn't
    /// allowed)
    pub fn is_empty(&self) -> bool {
        self.total_months == 0
    }
}

/// The range covering every position's period
pub fn timeline_range(positions: &[Position], clock: &dyn Clock) -> TimelineRange {
    let periods: Vec<ParsedPeriod> = positions
        .iter()
        .map(|position| position.parsed_period(clock))
        .collect();
    timeline_range_of_periods(&periods, clock)
}

/// The range covering every period.  Never has a zero span when there's at
/// least one period, even if every period starts and ends at the same time.
pub fn timeline_range_of_periods(periods: &[ParsedPeriod], clock: &dyn Clock) -> TimelineRange {
    let (Some(start), Some(end)) = (
        periods.iter().map(|period| period.start).min(),
        periods.iter().map(|period| period.end).max(),
    ) else {
        return TimelineRange::empty(clock.today());
    };

    TimelineRange {
        start,
        end,
        total_months: start.months_until(&end).max(1),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use folio_core::test_helpers::{clock, position};

    fn date(day: i64, month: i64, year: i64) -> Date {
        Date::from(day, month, year).unwrap()
    }

    #[test]
    fn example() {
        let positions = [position("p1", "2020 - 2022"), position("p2", "2022 - Present")];
        let range = timeline_range(&positions, &clock());
        assert_eq!(range.start, date(1, 1, 2020));
        assert_eq!(range.end, date(1, 1, 2024));
        assert_eq!(range.total_months, 48);
    }

    #[test]
    fn empty() {
        let range = timeline_range(&[], &clock());
        assert_eq!(range.total_months, 0);
        assert_eq!(range.start, clock().today());
        assert_eq!(range.end, clock().today());
        assert!(range.is_empty());
    }

    #[test]
    fn bounds_every_position() {
        let positions = [
            position("a", "March 2013 - 2015"),
            position("b", "2015 - 2018"),
            position("c", "2018 - Sep 2020"),
            position("d", "2022 - Present"),
            position("e", "nonsense"),
        ];
        let range = timeline_range(&positions, &clock());
        for position in &positions {
            let period = position.parsed_period(&clock());
            assert!(range.start <= period.start);
            assert!(range.end >= period.end);
        }
        assert_eq!(range.start, date(1, 3, 2013));
        assert_eq!(range.total_months, 130);
    }

    #[test]
    fn zero_span_is_never_zero_months() {
        let positions = [position("a", "2020 - 2020"), position("b", "2020 - 2020")];
        let range = timeline_range(&positions, &clock());
        assert_eq!(range.total_months, 1);
        assert!(!range.is_empty());
    }
}
