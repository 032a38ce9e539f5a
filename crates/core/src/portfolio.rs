// SPDX-License-Identifier: MIT

//!
//! The portfolio: every position, loaded from (and exported to) JSON
//!

use crate::{AboutData, Achievement, AchievementId, Position, PositionId};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the exported/loaded portfolio
pub const PORTFOLIO_FILE_NAME: &str = "portfolio.json";

/// File name of the exported/loaded about page data
pub const ABOUT_FILE_NAME: &str = "about.json";

/// Errors that can occur when loading or exporting portfolio data
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Two positions share an ID
    #[error("Position ID `{0}` is used more than once")]
    DuplicatePosition(PositionId),

    /// Two achievements of the same position share an ID
    #[error("Achievement ID `{1}` is used more than once in position `{0}`")]
    DuplicateAchievement(PositionId, AchievementId),

    /// An error occured when reading or writing a file
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// A JSON error occured
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// All career positions, in display order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Portfolio {
    positions: Vec<Position>,
}

/// The achievement shown on a position's detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentAchievement<'a> {
    pub index: usize,
    pub achievement: &'a Achievement,

    /// The achievements either side, for the detail page's arrows
    pub previous: Option<&'a AchievementId>,
    pub next: Option<&'a AchievementId>,

    /// How many achievements the position has
    pub total: usize,
}

/// The positions either side of one in the data order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbours<'a> {
    pub previous: Option<&'a Position>,
    pub next: Option<&'a Position>,
}

impl Portfolio {
    /// Create a portfolio if the IDs are unique
    pub fn from(positions: Vec<Position>) -> Result<Self, PortfolioError> {
        let portfolio = Portfolio { positions };
        portfolio.check_ids()?;
        Ok(portfolio)
    }

    /// Load a portfolio from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, PortfolioError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.check_ids()?;
        Ok(portfolio)
    }

    /// Load a portfolio from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PortfolioError> {
        let path = path.as_ref();
        info!("Loading portfolio from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let portfolio: Portfolio = serde_json::from_reader(reader)?;
        portfolio.check_ids()?;
        debug!("Loaded {} positions", portfolio.positions.len());
        Ok(portfolio)
    }

    /// Position IDs must be unique, and achievement IDs must be unique within
    /// their position
    fn check_ids(&self) -> Result<(), PortfolioError> {
        let mut position_ids = HashSet::new();
        for position in &self.positions {
            if !position_ids.insert(&position.id) {
                return Err(PortfolioError::DuplicatePosition(position.id.clone()));
            }
            let mut achievement_ids = HashSet::new();
            for achievement in &position.achievements {
                if !achievement_ids.insert(achievement.id()) {
                    return Err(PortfolioError::DuplicateAchievement(
                        position.id.clone(),
                        achievement.id().clone(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// All positions in data order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Find a position by ID
    pub fn position(&self, id: &PositionId) -> Option<&Position> {
        self.positions.iter().find(|position| &position.id == id)
    }

    /// The positions before and after the one with the ID (in data order).
    /// `None` if there's no such position.
    pub fn neighbours(&self, id: &PositionId) -> Option<Neighbours<'_>> {
        let index = self.positions.iter().position(|p| &p.id == id)?;
        Some(Neighbours {
            previous: index.checked_sub(1).map(|i| &self.positions[i]),
            next: self.positions.get(index + 1),
        })
    }

    /// The achievement to show on a position's detail page: the one requested
    /// (e.g. by the `achievement` query parameter) or, if that's missing or
    /// unknown, the first.  `None` if the position doesn't exist or has no
    /// achievements.
    pub fn current_achievement(
        &self,
        position_id: &PositionId,
        requested: Option<&AchievementId>,
    ) -> Option<CurrentAchievement<'_>> {
        let achievements = &self.position(position_id)?.achievements;
        let index = requested
            .and_then(|requested| achievements.iter().position(|a| a.id() == requested))
            .unwrap_or(0);
        let achievement = achievements.get(index)?;
        Some(CurrentAchievement {
            index,
            achievement,
            previous: index
                .checked_sub(1)
                .and_then(|i| achievements.get(i))
                .map(Achievement::id),
            next: achievements.get(index + 1).map(Achievement::id),
            total: achievements.len(),
        })
    }

    /// Write the portfolio and the about page data to `dir` as pretty-printed
    /// JSON.  Returns the paths written.
    pub fn export_to_dir<P: AsRef<Path>>(
        &self,
        about: &AboutData,
        dir: P,
    ) -> Result<Vec<PathBuf>, PortfolioError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let portfolio_path = dir.join(PORTFOLIO_FILE_NAME);
        write_pretty_json(&portfolio_path, self)?;

        let about_path = dir.join(ABOUT_FILE_NAME);
        write_pretty_json(&about_path, about)?;

        info!("Exported portfolio data to {}", dir.display());
        Ok(vec![portfolio_path, about_path])
    }
}

fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PortfolioError> {
    let json = serde_json::to_string_pretty(value)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::test::path_to_test_data;
    use tempdir::TempDir;

    pub(crate) fn test_portfolio() -> Portfolio {
        Portfolio::from_path(path_to_test_data().join(PORTFOLIO_FILE_NAME)).unwrap()
    }

    fn id(id: &str) -> PositionId {
        PositionId::from(id).unwrap()
    }

    #[test]
    fn load() {
        let portfolio = test_portfolio();
        assert_eq!(portfolio.positions().len(), 4);
        assert_eq!(portfolio.positions()[0].id.as_str(), "principal-designer-tech");
    }

    #[test]
    fn duplicate_ids() {
        let json = r#"{"positions": [
            {"id": "a", "title": "", "company": "", "period": "2020", "location": ""},
            {"id": "a", "title": "", "company": "", "period": "2021", "location": ""}
        ]}"#;
        assert!(matches!(
            Portfolio::from_json_str(json),
            Err(PortfolioError::DuplicatePosition(_))
        ));

        let json = r#"{"positions": [
            {"id": "a", "title": "", "company": "", "period": "2020", "location": "",
             "achievements": ["Same", "same"]}
        ]}"#;
        assert!(matches!(
            Portfolio::from_json_str(json),
            Err(PortfolioError::DuplicateAchievement(_, _))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Portfolio::from_path(path_to_test_data().join("nope.json")),
            Err(PortfolioError::StdIo(_))
        ));
    }

    #[test]
    fn neighbours() {
        let portfolio = test_portfolio();

        let first = portfolio.neighbours(&id("principal-designer-tech")).unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.next.unwrap().id.as_str(), "design-lead-fintech");

        let last = portfolio.neighbours(&id("ux-director-enterprise")).unwrap();
        assert_eq!(last.previous.unwrap().id.as_str(), "product-manager-startup");
        assert!(last.next.is_none());

        assert!(portfolio.neighbours(&id("unknown")).is_none());
    }

    #[test]
    fn current_achievement() {
        let portfolio = test_portfolio();
        let position = id("design-lead-fintech");

        // Defaults to the first
        let current = portfolio.current_achievement(&position, None).unwrap();
        assert_eq!(current.index, 0);
        assert_eq!(current.total, 3);
        assert!(current.previous.is_none());
        assert_eq!(current.next.unwrap().as_str(), "onboarding");

        // Requested
        let requested = AchievementId::from("onboarding").unwrap();
        let current = portfolio
            .current_achievement(&position, Some(&requested))
            .unwrap();
        assert_eq!(current.index, 1);
        assert_eq!(current.achievement.id(), &requested);
        assert_eq!(current.previous.unwrap().as_str(), "platform");
        assert_eq!(current.next.unwrap().as_str(), "design-team");

        // Last
        let last = AchievementId::from("design-team").unwrap();
        let current = portfolio.current_achievement(&position, Some(&last)).unwrap();
        assert_eq!(current.index, 2);
        assert_eq!(current.previous.unwrap().as_str(), "onboarding");
        assert!(current.next.is_none());

        // Unknown falls back to the first
        let unknown = AchievementId::from("unknown").unwrap();
        let current = portfolio
            .current_achievement(&position, Some(&unknown))
            .unwrap();
        assert_eq!(current.index, 0);

        // Unknown position
        assert!(portfolio.current_achievement(&id("nope"), None).is_none());
    }

    #[test]
    fn export_and_reload() {
        let portfolio = test_portfolio();
        let about = AboutData::from_path(path_to_test_data().join(ABOUT_FILE_NAME)).unwrap();
        let dir = TempDir::new("folio-export").unwrap();

        let written = portfolio.export_to_dir(&about, dir.path()).unwrap();
        assert_eq!(written.len(), 2);

        let reloaded = Portfolio::from_path(dir.path().join(PORTFOLIO_FILE_NAME)).unwrap();
        assert_eq!(reloaded, portfolio);
        let reloaded = AboutData::from_path(dir.path().join(ABOUT_FILE_NAME)).unwrap();
        assert_eq!(reloaded, about);
    }
}
