// SPDX-License-Identifier: MIT

//!
//! Events
//!

use folio_core::{AchievementId, PositionId};
use serde::Serialize;
use std::fmt::Debug;

/// Interaction events for whoever's driving the timeline (e.g. to navigate to
/// a position's page after a click)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TimelineInteractionEvent {
    Click(PositionId),
    Hover(PositionId),
    Unhover,
    MilestoneToggled(PositionId, AchievementId),
}
