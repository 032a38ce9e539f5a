// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Folio project*
//!
//! This crate defines the basic datatypes used across the Folio project
//! (timeline layout, URL state, the `folio` tool): dates and the clock that
//! says what "now" is, period strings, positions & achievements, the about
//! page, the file listing, and the config.
//!
//! It also loads all of these from (and exports them to) JSON, and computes
//! career stats.
//!

mod about;
mod clock;
mod config;
mod date;
mod files;
mod id;
mod period;
mod portfolio;
mod position;
mod stats;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use about::*;
pub use clock::*;
pub use config::*;
pub use date::*;
pub use files::*;
pub use id::*;
pub use period::*;
pub use portfolio::*;
pub use position::*;
pub use stats::*;

/// Mark that a type knows which positions exist and which achievements they
/// have.  Used to ignore unknown IDs (e.g. in URLs).
pub trait PositionCatalogue {
    /// Whether there's a position with the ID
    fn has_position(&self, id: &PositionId) -> bool;

    /// Whether the position exists and has an achievement with the ID
    fn has_achievement(&self, position: &PositionId, achievement: &AchievementId) -> bool;

    /// The IDs of every position that has an achievement with the ID
    fn positions_with_achievement(&self, achievement: &AchievementId) -> Vec<PositionId>;
}

impl PositionCatalogue for Portfolio {
    fn has_position(&self, id: &PositionId) -> bool {
        self.position(id).is_some()
    }

    fn has_achievement(&self, position: &PositionId, achievement: &AchievementId) -> bool {
        self.position(position)
            .is_some_and(|position| position.has_achievement(achievement))
    }

    fn positions_with_achievement(&self, achievement: &AchievementId) -> Vec<PositionId> {
        self.positions()
            .iter()
            .filter(|position| position.has_achievement(achievement))
            .map(|position| position.id.clone())
            .collect()
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use std::path::PathBuf;

    pub fn path_to_test_data() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
    }

    #[test]
    fn catalogue() {
        let portfolio = crate::portfolio::test::test_portfolio();
        let fintech = PositionId::from("design-lead-fintech").unwrap();
        let onboarding = AchievementId::from("onboarding").unwrap();
        let design_team = AchievementId::from("design-team").unwrap();

        assert!(portfolio.has_position(&fintech));
        assert!(!portfolio.has_position(&PositionId::from("nope").unwrap()));
        assert!(PositionCatalogue::has_achievement(&portfolio, &fintech, &onboarding));
        assert_eq!(portfolio.positions_with_achievement(&onboarding), vec![fintech]);
        assert_eq!(portfolio.positions_with_achievement(&design_team).len(), 2);
    }
}
