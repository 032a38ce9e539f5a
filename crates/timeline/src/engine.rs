// SPDX-License-Identifier: MIT

//!
//! The `folio-timeline` engine
//!

mod bar;
mod date_range;
mod events;
mod heading;
mod helpers;

pub(crate) use helpers::fraction_of;

pub use bar::*;
pub use date_range::*;
pub use events::*;
pub use heading::*;
pub use helpers::{Preview, as_percentage};

use folio_core::{AchievementId, AchievementImage, Clock, Position, PositionId};
use log::{debug, trace};
use std::collections::BTreeSet;

/// The Gantt-style career timeline.  Holds the layout (range, bars, labels)
/// and the interaction state (hover, highlighted milestones), and queues up
/// interaction events for the caller to drain.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    /// The span all bars are placed within
    range: TimelineRange,

    /// Newest first
    bars: Vec<Bar>,

    /// Newest first
    labels: Vec<YearLabel>,

    /// The position the pointer is over (if any)
    hovered: Option<PositionId>,

    /// Milestones that have been clicked on.  Keyed by position as well as
    /// achievement so that a shared achievement ID only lights up where it was
    /// clicked.
    highlighted_milestones: BTreeSet<(PositionId, AchievementId)>,

    /// All interaction events that the caller might be interested in
    interaction_events: Vec<TimelineInteractionEvent>,
}

impl TimelineLayout {
    /// Lay out the positions.  "Present" is resolved with the clock.
    pub fn from(positions: &[Position], clock: &dyn Clock) -> Self {
        let ordered = display_order(positions, clock);
        let periods: Vec<_> = ordered.iter().map(|(_, period)| *period).collect();
        let range = timeline_range_of_periods(&periods, clock);

        let bars: Vec<Bar> = ordered
            .into_iter()
            .filter_map(|(position, period)| Bar::from(position, period, &range))
            .collect();
        let labels = year_labels(&range);

        debug!(
            "Timeline laid out: {} bars, {} labels, {} months from {} to {}",
            bars.len(),
            labels.len(),
            range.total_months,
            range.start.as_iso_format(),
            range.end.as_iso_format(),
        );

        TimelineLayout {
            range,
            bars,
            labels,
            hovered: None,
            highlighted_milestones: BTreeSet::new(),
            interaction_events: Vec::new(),
        }
    }

    pub fn range(&self) -> &TimelineRange {
        &self.range
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn labels(&self) -> &[YearLabel] {
        &self.labels
    }

    pub fn bar(&self, id: &PositionId) -> Option<&Bar> {
        self.bars.iter().find(|bar| &bar.position_id == id)
    }

    pub fn hovered(&self) -> Option<&PositionId> {
        self.hovered.as_ref()
    }

    /// Mark the position as hovered over (or clear it with `None`).  Unknown
    /// IDs are ignored.
    pub fn set_hovered(&mut self, id: Option<&PositionId>) {
        match id {
            Some(id) if self.bar(id).is_none() => {
                debug!("Ignoring hover over unknown position `{id}`");
            }
            Some(id) => {
                if self.hovered.as_ref() != Some(id) {
                    trace!("Hovering over `{id}`");
                    self.hovered = Some(id.clone());
                    self.interaction_events
                        .push(TimelineInteractionEvent::Hover(id.clone()));
                }
            }
            None => {
                if self.hovered.take().is_some() {
                    self.interaction_events
                        .push(TimelineInteractionEvent::Unhover);
                }
            }
        }
    }

    /// Record a click on a position's bar
    pub fn click(&mut self, id: &PositionId) {
        if self.bar(id).is_some() {
            self.interaction_events
                .push(TimelineInteractionEvent::Click(id.clone()));
        } else {
            debug!("Ignoring click on unknown position `{id}`");
        }
    }

    /// Flip a milestone's highlight.  Returns whether it's now highlighted.
    /// Milestones that aren't on the timeline are ignored (and never
    /// highlighted).
    pub fn toggle_milestone(&mut self, position: &PositionId, achievement: &AchievementId) -> bool {
        let exists = self.bar(position).is_some_and(|bar| {
            bar.milestones
                .iter()
                .any(|milestone| &milestone.achievement_id == achievement)
        });
        if !exists {
            debug!("Ignoring toggle of unknown milestone `{position}`/`{achievement}`");
            return false;
        }

        let key = (position.clone(), achievement.clone());
        let highlighted = if self.highlighted_milestones.remove(&key) {
            false
        } else {
            self.highlighted_milestones.insert(key)
        };
        self.interaction_events
            .push(TimelineInteractionEvent::MilestoneToggled(
                position.clone(),
                achievement.clone(),
            ));
        highlighted
    }

    pub fn is_milestone_highlighted(&self, position: &PositionId, achievement: &AchievementId) -> bool {
        self.highlighted_milestones
            .contains(&(position.clone(), achievement.clone()))
    }

    /// Take all queued interaction events (oldest first)
    pub fn drain_interaction_events(&mut self) -> Vec<TimelineInteractionEvent> {
        std::mem::take(&mut self.interaction_events)
    }
}

/// The position's first `limit` tags and how many more there are
pub fn tag_preview(position: &Position, limit: usize) -> Preview<'_, String> {
    Preview::of(&position.tags, limit)
}

/// The first `limit` images across all of the position's achievements and how
/// many more there are
pub fn thumbnail_preview(position: &Position, limit: usize) -> (Vec<&AchievementImage>, usize) {
    let mut images = position
        .achievements
        .iter()
        .flat_map(|achievement| achievement.images());
    let shown: Vec<&AchievementImage> = images.by_ref().take(limit).collect();
    (shown, images.count())
}

#[cfg(test)]
mod test {
    use super::*;
    use folio_core::test_helpers::{clock, position};
    use folio_core::{Achievement, AchievementImage, Exit, ExitType};

    fn id(id: &str) -> PositionId {
        PositionId::from(id).unwrap()
    }

    fn achievement_id(id: &str) -> AchievementId {
        AchievementId::from(id).unwrap()
    }

    fn layout() -> TimelineLayout {
        let mut p1 = position("p1", "2020 - 2022");
        p1.achievements = vec![
            Achievement::from_title("A1").unwrap(),
            Achievement::from_title("Shared").unwrap(),
        ];
        p1.exit = Some(Exit {
            exit_type: ExitType::Ipo,
            company: None,
            details: "IPO raising $120M".to_string(),
        });
        let mut p2 = position("p2", "2022 - Present");
        p2.achievements = vec![Achievement::from_title("Shared").unwrap()];
        TimelineLayout::from(&[p1, p2], &clock())
    }

    #[test]
    fn lays_out_newest_first() {
        let layout = layout();
        assert_eq!(layout.range().total_months, 48);
        let ids: Vec<&str> = layout.bars().iter().map(|b| b.position_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
        assert_eq!(layout.bar(&id("p1")).unwrap().exit, Some(ExitType::Ipo));
        assert_eq!(layout.labels().len(), 5);
        for bar in layout.bars() {
            assert!((0.0..=1.0).contains(&bar.end_offset));
            assert!((0.0..=1.0).contains(&bar.width));
        }
    }

    #[test]
    fn empty() {
        let layout = TimelineLayout::from(&[], &clock());
        assert!(layout.range().is_empty());
        assert!(layout.bars().is_empty());
        assert!(layout.labels().is_empty());
    }

    #[test]
    fn hover() {
        let mut layout = layout();
        layout.set_hovered(Some(&id("p1")));
        layout.set_hovered(Some(&id("p1")));
        layout.set_hovered(Some(&id("nope")));
        assert_eq!(layout.hovered(), Some(&id("p1")));
        layout.set_hovered(None);
        assert_eq!(layout.hovered(), None);
        assert_eq!(
            layout.drain_interaction_events(),
            vec![
                TimelineInteractionEvent::Hover(id("p1")),
                TimelineInteractionEvent::Unhover,
            ]
        );
        assert!(layout.drain_interaction_events().is_empty());
    }

    #[test]
    fn click() {
        let mut layout = layout();
        layout.click(&id("p2"));
        layout.click(&id("nope"));
        assert_eq!(
            layout.drain_interaction_events(),
            vec![TimelineInteractionEvent::Click(id("p2"))]
        );
    }

    #[test]
    fn milestones_highlight_per_position() {
        let mut layout = layout();
        let shared = achievement_id("shared");

        assert!(layout.toggle_milestone(&id("p1"), &shared));
        assert!(layout.is_milestone_highlighted(&id("p1"), &shared));
        assert!(!layout.is_milestone_highlighted(&id("p2"), &shared));

        assert!(!layout.toggle_milestone(&id("p1"), &shared));
        assert!(!layout.is_milestone_highlighted(&id("p1"), &shared));

        // Not on that position
        assert!(!layout.toggle_milestone(&id("p2"), &achievement_id("a1")));
        assert!(!layout.is_milestone_highlighted(&id("p2"), &achievement_id("a1")));
        assert_eq!(layout.drain_interaction_events().len(), 2);
    }

    #[test]
    fn previews() {
        let mut p1 = position("p1", "2020 - 2022");
        p1.tags = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
        let tags = tag_preview(&p1, 4);
        assert_eq!(tags.shown.len(), 4);
        assert_eq!(tags.overflow_label(), Some("+1 more".to_string()));

        let (shown, hidden) = thumbnail_preview(&p1, 3);
        assert!(shown.is_empty());
        assert_eq!(hidden, 0);

        let image = |n: usize| AchievementImage {
            url: format!("/images/{n}.png"),
            alt: format!("Image {n}"),
            caption: None,
        };
        p1.achievements = vec![
            Achievement::from(
                achievement_id("a1"),
                "A1".to_string(),
                String::new(),
                vec![image(1), image(2)],
            ),
            Achievement::from(
                achievement_id("a2"),
                "A2".to_string(),
                String::new(),
                vec![image(3), image(4), image(5)],
            ),
        ];
        let (shown, hidden) = thumbnail_preview(&p1, 3);
        let urls: Vec<&str> = shown.iter().map(|image| image.url.as_str()).collect();
        assert_eq!(urls, vec!["/images/1.png", "/images/2.png", "/images/3.png"]);
        assert_eq!(hidden, 2);
    }
}
