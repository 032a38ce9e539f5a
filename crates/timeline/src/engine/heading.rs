// SPDX-License-Identifier: MIT

//!
//! Year labels along the time axis
//!

use super::{TimelineRange, fraction_of};
use folio_core::Date;
use log::trace;
use serde::Serialize;
use std::fmt::Debug;

/// A year marker on the time axis.  `offset` is measured from the latest
/// (left) edge, like bar offsets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearLabel {
    pub year: i32,
    pub offset: f64,
}

/// One label per 1st January, from the range's end year back to the range's
/// start.  Newest first.
pub fn year_labels(range: &TimelineRange) -> Vec<YearLabel> {
    if range.is_empty() {
        return Vec::new();
    }

    let mut labels = Vec::new();
    let mut year = i64::from(range.end.year().value());
    while let Ok(january) = Date::first_of_year(year) {
        if january < range.start {
            break;
        }
        labels.push(YearLabel {
            year: january.year().value(),
            offset: fraction_of(january.months_until(&range.end), range.total_months),
        });
        year -= 1;
    }
    trace!("{} year labels", labels.len());
    labels
}
