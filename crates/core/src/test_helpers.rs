// SPDX-License-Identifier: MIT

//!
//! Builders shared by this crate's tests and the tests of the crates that use
//! it (enable the `test-helpers` feature)
//!

use crate::{Date, FixedClock, Position, PositionId};

/// Today is 1st January 2024
pub fn clock() -> FixedClock {
    FixedClock(Date::from(1, 1, 2024).unwrap())
}

/// A position with only the fields layout cares about
pub fn position(id: &str, period: &str) -> Position {
    Position {
        id: PositionId::from(id).unwrap(),
        title: format!("Title {id}"),
        company: format!("Company {id}"),
        period: period.to_string(),
        location: String::new(),
        blurb: String::new(),
        description: String::new(),
        tags: Vec::new(),
        image_url: String::new(),
        logo_url: None,
        achievements: Vec::new(),
        exit: None,
    }
}
