// SPDX-License-Identifier: MIT

//!
//! Which positions and achievements are expanded
//!

use folio_core::{AchievementId, PositionId};
use log::{debug, trace};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The open positions, and the open achievements of each open position.
///
/// An achievement can only be open while its position is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpandedState {
    positions: BTreeSet<PositionId>,
    achievements: BTreeMap<PositionId, BTreeSet<AchievementId>>,
}

impl ExpandedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is open
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_position_open(&self, position: &PositionId) -> bool {
        self.positions.contains(position)
    }

    pub fn is_achievement_open(&self, position: &PositionId, achievement: &AchievementId) -> bool {
        self.achievements
            .get(position)
            .is_some_and(|open| open.contains(achievement))
    }

    /// Open positions, in ID order
    pub fn open_positions(&self) -> impl Iterator<Item = &PositionId> {
        self.positions.iter()
    }

    /// The position's open achievements, in ID order
    pub fn open_achievements(&self, position: &PositionId) -> impl Iterator<Item = &AchievementId> {
        self.achievements.get(position).into_iter().flatten()
    }

    /// Every open achievement with its position
    pub fn all_open_achievements(&self) -> impl Iterator<Item = (&PositionId, &AchievementId)> {
        self.achievements.iter().flat_map(|(position, achievements)| {
            achievements
                .iter()
                .map(move |achievement| (position, achievement))
        })
    }

    pub fn open_position(&mut self, position: PositionId) {
        trace!("Opening position `{position}`");
        self.positions.insert(position);
    }

    /// Close the position along with all of its achievements
    pub fn close_position(&mut self, position: &PositionId) {
        trace!("Closing position `{position}`");
        self.positions.remove(position);
        self.achievements.remove(position);
    }

    /// Open an achievement of an open position.  Nothing happens if the
    /// position is closed.
    pub fn open_achievement(&mut self, position: PositionId, achievement: AchievementId) {
        if !self.is_position_open(&position) {
            debug!("Not opening `{position}`/`{achievement}` while `{position}` is closed");
            return;
        }
        trace!("Opening achievement `{position}`/`{achievement}`");
        self.achievements
            .entry(position)
            .or_default()
            .insert(achievement);
    }

    /// Close an achievement.  The position stays as it is.
    pub fn close_achievement(&mut self, position: &PositionId, achievement: &AchievementId) {
        trace!("Closing achievement `{position}`/`{achievement}`");
        if let Some(open) = self.achievements.get_mut(position) {
            open.remove(achievement);
            if open.is_empty() {
                self.achievements.remove(position);
            }
        }
    }

    /// Open the position if it's closed, close it (and its achievements) if
    /// it's open.  Returns whether it's now open.
    pub fn toggle_position(&mut self, position: &PositionId) -> bool {
        if self.is_position_open(position) {
            self.close_position(position);
            false
        } else {
            self.open_position(position.clone());
            true
        }
    }

    /// Open the achievement if it's closed, close it if it's open.  Returns
    /// whether it's now open.  The position's own state never changes, so
    /// achievements of a closed position can't be toggled.
    pub fn toggle_achievement(&mut self, position: &PositionId, achievement: &AchievementId) -> bool {
        if !self.is_position_open(position) {
            debug!("Ignoring toggle of `{position}`/`{achievement}` while `{position}` is closed");
            return false;
        }
        if self.is_achievement_open(position, achievement) {
            self.close_achievement(position, achievement);
            false
        } else {
            self.open_achievement(position.clone(), achievement.clone());
            true
        }
    }
}
