// SPDX-License-Identifier: MIT

//!
//! Position bars
//!

use super::{TimelineRange, fraction_of};
use folio_core::{AchievementId, Clock, ExitType, ParsedPeriod, Position, PositionId};
use serde::Serialize;
use std::fmt::Debug;

/// A clickable segment along the bottom of a bar, one per achievement.  The
/// segments share the bar's width equally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub achievement_id: AchievementId,
    pub title: String,
}

/// Everything needed to draw a position on the timeline.
///
/// Offsets are fractions of the whole timeline measured from the latest edge,
/// so the newest work sits on the left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub position_id: PositionId,
    pub title: String,
    pub company: String,
    pub exit: Option<ExitType>,
    pub period: ParsedPeriod,

    /// Distance of the bar's end from the range end, in `[0, 1]`
    pub end_offset: f64,

    /// The bar's length, in `[0, 1]`
    pub width: f64,

    pub milestones: Vec<Milestone>,
}

impl Bar {
    /// Place the position within the range.  Nothing can be placed in an empty
    /// range.
    pub fn from(position: &Position, period: ParsedPeriod, range: &TimelineRange) -> Option<Self> {
        if range.is_empty() {
            return None;
        }
        Some(Bar {
            position_id: position.id.clone(),
            title: position.title.clone(),
            company: position.company.clone(),
            exit: position.exit.as_ref().map(|exit| exit.exit_type),
            period,
            end_offset: fraction_of(period.end.months_until(&range.end), range.total_months),
            width: fraction_of(period.duration, range.total_months),
            milestones: position
                .achievements
                .iter()
                .map(|achievement| Milestone {
                    achievement_id: achievement.id().clone(),
                    title: achievement.title().to_string(),
                })
                .collect(),
        })
    }
}

/// The positions (with their parsed periods) newest first.  Positions that
/// start on the same date keep their input order.
pub fn display_order<'a>(
    positions: &'a [Position],
    clock: &dyn Clock,
) -> Vec<(&'a Position, ParsedPeriod)> {
    let mut ordered: Vec<(&Position, ParsedPeriod)> = positions
        .iter()
        .map(|position| (position, position.parsed_period(clock)))
        .collect();
    ordered.sort_by(|(_, a), (_, b)| b.start.cmp(&a.start));
    ordered
}
