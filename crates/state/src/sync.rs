// SPDX-License-Identifier: MIT

//!
//! Keeping the expanded state and the URL in step
//!

use crate::{ExpandedState, StateError, from_query, to_query};
use folio_core::{AchievementId, AchievementKeyStyle, PositionCatalogue, PositionId};
use log::{debug, info};

/// Owns the expanded state and the query string it's mirrored to.  Every
/// toggle rewrites the whole query string straight away.
pub struct UrlStateSync<'a> {
    catalogue: &'a dyn PositionCatalogue,
    style: AchievementKeyStyle,
    state: ExpandedState,
    query: String,
}

impl<'a> UrlStateSync<'a> {
    /// Start from the query string the page was loaded with.  The query string
    /// itself isn't rewritten until something is toggled.
    pub fn new(
        catalogue: &'a dyn PositionCatalogue,
        style: AchievementKeyStyle,
        query: &str,
    ) -> Result<Self, StateError> {
        let state = from_query(query, catalogue)?;
        info!("Expanded state initialised from `{query}`");
        Ok(UrlStateSync {
            catalogue,
            style,
            state,
            query: query.to_string(),
        })
    }

    pub fn state(&self) -> &ExpandedState {
        &self.state
    }

    /// The current query string (without a leading `?`)
    pub fn query(&self) -> &str {
        self.query.strip_prefix('?').unwrap_or(&self.query)
    }

    /// Toggle a position and rewrite the query string.  Unknown positions are
    /// ignored.
    pub fn toggle_position(&mut self, position: &PositionId) -> Result<&str, StateError> {
        if !self.catalogue.has_position(position) {
            debug!("Ignoring toggle of unknown position `{position}`");
            return Ok(self.query());
        }
        let open = self.state.toggle_position(position);
        debug!("Position `{position}` is now {}", if open { "open" } else { "closed" });
        self.write_query()
    }

    /// Toggle an achievement and rewrite the query string.  Unknown
    /// achievements, and achievements of closed positions, are ignored.
    pub fn toggle_achievement(
        &mut self,
        position: &PositionId,
        achievement: &AchievementId,
    ) -> Result<&str, StateError> {
        if !self.catalogue.has_achievement(position, achievement) {
            debug!("Ignoring toggle of unknown achievement `{position}`/`{achievement}`");
            return Ok(self.query());
        }
        if !self.state.is_position_open(position) {
            debug!("Ignoring toggle of `{position}`/`{achievement}` while `{position}` is closed");
            return Ok(self.query());
        }
        let open = self.state.toggle_achievement(position, achievement);
        debug!(
            "Achievement `{position}`/`{achievement}` is now {}",
            if open { "open" } else { "closed" }
        );
        self.write_query()
    }

    /// The URL changed underneath us (back/forward, a pasted link).  Reading
    /// the same query string twice leaves the same state.
    pub fn on_url_change(&mut self, query: &str) -> Result<(), StateError> {
        self.state = from_query(query, self.catalogue)?;
        self.query = query.to_string();
        debug!("Expanded state re-read from `{query}`");
        Ok(())
    }

    fn write_query(&mut self) -> Result<&str, StateError> {
        self.query = to_query(&self.state, self.style, &self.query)?;
        Ok(self.query())
    }
}
