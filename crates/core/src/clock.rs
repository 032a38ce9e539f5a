// SPDX-License-Identifier: MIT

//!
//! Where "now" comes from.  Open-ended periods ("Present") are resolved
//! against a [`Clock`] every time they're parsed, so the duration of an ongoing
//! position grows as time passes.  Inject a [`FixedClock`] where that matters
//! (tests, reproducible exports).
//!

use crate::Date;
use chrono::Local;

/// Supplies today's date
pub trait Clock {
    /// Today's date
    fn today(&self) -> Date;
}

/// The local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Local::now().date_naive().into()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
