// SPDX-License-Identifier: MIT

//!
//! Reading and writing the expanded state as query string parameters
//!

use crate::{ExpandedState, StateError};
use folio_core::{AchievementId, AchievementKeyStyle, PositionCatalogue, PositionId};
use log::{debug, trace};
use std::collections::BTreeSet;

/// Query parameter holding the open positions
pub const POSITION_PARAM: &str = "position";

/// Query parameter holding the open achievements
pub const ACHIEVEMENT_PARAM: &str = "achievement";

const LIST_SEPARATOR: &str = ",";
const NAMESPACE_SEPARATOR: char = ':';

/// The values of the `position` and `achievement` parameters for the state
pub fn encode_params(state: &ExpandedState, style: AchievementKeyStyle) -> (String, String) {
    let positions = join(state.open_positions().map(|id| id.to_string()));
    let achievements = match style {
        AchievementKeyStyle::Flat => {
            // The same ID may be open under more than one position
            let ids: BTreeSet<&AchievementId> = state
                .all_open_achievements()
                .map(|(_, achievement)| achievement)
                .collect();
            join(ids.into_iter().map(|id| id.to_string()))
        }
        AchievementKeyStyle::Namespaced => join(
            state
                .all_open_achievements()
                .map(|(position, achievement)| format!("{position}{NAMESPACE_SEPARATOR}{achievement}")),
        ),
    };
    (positions, achievements)
}

/// Write the state into an existing query string.  Other parameters are kept
/// where they are.  Both parameters are always written, even when empty.
pub fn to_query(
    state: &ExpandedState,
    style: AchievementKeyStyle,
    existing_query: &str,
) -> Result<String, StateError> {
    let (positions, achievements) = encode_params(state, style);

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut wrote_positions = false;
    let mut wrote_achievements = false;
    for (key, value) in decode_pairs(existing_query)? {
        match key.as_str() {
            POSITION_PARAM if !wrote_positions => {
                pairs.push((key, positions.clone()));
                wrote_positions = true;
            }
            ACHIEVEMENT_PARAM if !wrote_achievements => {
                pairs.push((key, achievements.clone()));
                wrote_achievements = true;
            }
            POSITION_PARAM | ACHIEVEMENT_PARAM => {}
            _ => pairs.push((key, value)),
        }
    }
    if !wrote_positions {
        pairs.push((POSITION_PARAM.to_string(), positions));
    }
    if !wrote_achievements {
        pairs.push((ACHIEVEMENT_PARAM.to_string(), achievements));
    }

    let query = serde_urlencoded::to_string(&pairs)?;
    trace!("Expanded state written as `{query}`");
    Ok(query)
}

/// Read the state from a query string (with or without the leading `?`).
///
/// Positions the catalogue doesn't know are ignored, as are achievements that
/// don't exist or whose position isn't open.  A flat achievement ID opens under
/// every open position that has an achievement with that ID.
pub fn from_query(query: &str, catalogue: &dyn PositionCatalogue) -> Result<ExpandedState, StateError> {
    let pairs = decode_pairs(query)?;
    let param = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    };

    let mut state = ExpandedState::new();
    for item in split_list(param(POSITION_PARAM)) {
        match PositionId::from(item) {
            Ok(id) if catalogue.has_position(&id) => state.open_position(id),
            _ => debug!("Ignoring unknown position `{item}` in query"),
        }
    }

    for item in split_list(param(ACHIEVEMENT_PARAM)) {
        match item.split_once(NAMESPACE_SEPARATOR) {
            Some((position, achievement)) => {
                let ids = PositionId::from(position)
                    .ok()
                    .zip(AchievementId::from(achievement).ok());
                match ids {
                    Some((position, achievement))
                        if state.is_position_open(&position)
                            && catalogue.has_achievement(&position, &achievement) =>
                    {
                        state.open_achievement(position, achievement);
                    }
                    _ => debug!("Ignoring achievement `{item}` in query"),
                }
            }
            None => {
                let Ok(achievement) = AchievementId::from(item) else {
                    debug!("Ignoring achievement `{item}` in query");
                    continue;
                };
                let parents: Vec<PositionId> = catalogue
                    .positions_with_achievement(&achievement)
                    .into_iter()
                    .filter(|position| state.is_position_open(position))
                    .collect();
                if parents.is_empty() {
                    debug!("Ignoring achievement `{item}` in query (no open position has it)");
                }
                for position in parents {
                    state.open_achievement(position, achievement.clone());
                }
            }
        }
    }

    trace!("Expanded state read from `{query}` = {state:?}");
    Ok(state)
}

fn decode_pairs(query: &str) -> Result<Vec<(String, String)>, StateError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    Ok(serde_urlencoded::from_str(query)?)
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn join<I: Iterator<Item = String>>(items: I) -> String {
    items.collect::<Vec<_>>().join(LIST_SEPARATOR)
}
