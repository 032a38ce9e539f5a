// SPDX-License-Identifier: MIT

//!
//! The site's routes
//!

use crate::{ACHIEVEMENT_PARAM, RouteError, StateError};
use folio_core::{AchievementId, PositionId};
use std::fmt::{self, Display};

/// A page of the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The home page (timeline and position list)
    Index,
    About,
    Files,

    /// A position's page, optionally at one of its achievements
    Position {
        id: PositionId,
        achievement: Option<AchievementId>,
    },

    NotFound(String),
}

impl Route {
    /// Parse a URL path with an optional query string (e.g.
    /// `/position/p1?achievement=a1`).  Any fragment is dropped.  Anything
    /// unrecognised, including relative paths, is [`Route::NotFound`]; only
    /// malformed IDs are errors.
    pub fn parse(url: &str) -> Result<Route, RouteError> {
        let url = url.split_once('#').map_or(url, |(url, _)| url);
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        if path.is_empty() {
            return Ok(Route::Index);
        }
        let Some(absolute) = path.strip_prefix('/') else {
            return Ok(Route::NotFound(path.to_string()));
        };
        let trimmed = absolute.trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let route = match segments.as_slice() {
            [] => Route::Index,
            ["about"] => Route::About,
            ["files"] => Route::Files,
            ["position", id] if !id.is_empty() => {
                let pairs: Vec<(String, String)> =
                    serde_urlencoded::from_str(query).map_err(StateError::from)?;
                let achievement = pairs
                    .into_iter()
                    .find(|(key, _)| key == ACHIEVEMENT_PARAM)
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(_, value)| AchievementId::from(value))
                    .transpose()?;
                Route::Position {
                    id: PositionId::from(id)?,
                    achievement,
                }
            }
            _ => Route::NotFound(path.to_string()),
        };
        Ok(route)
    }

    /// The URL for the route
    pub fn to_url(&self) -> Result<String, RouteError> {
        Ok(match self {
            Route::Index => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Files => "/files".to_string(),
            Route::Position {
                id,
                achievement: None,
            } => format!("/position/{id}"),
            Route::Position {
                id,
                achievement: Some(achievement),
            } => {
                let query = serde_urlencoded::to_string(&[(ACHIEVEMENT_PARAM, achievement.as_str())])
                    .map_err(StateError::from)?;
                format!("/position/{id}?{query}")
            }
            Route::NotFound(path) => path.clone(),
        })
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_url() {
            Ok(url) => write!(f, "{url}"),
            Err(_) => Err(fmt::Error),
        }
    }
}
