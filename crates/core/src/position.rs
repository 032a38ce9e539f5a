// SPDX-License-Identifier: MIT

//!
//! Career positions and their achievements
//!

use crate::{AchievementId, Clock, IdError, ParsedPeriod, PositionId, parse_period, slugify};
use serde::{Deserialize, Deserializer, Serialize};

/// How a company was exited
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExitType {
    #[serde(rename = "IPO")]
    Ipo,
    Acquisition,
}

impl ExitType {
    /// Short label used on timeline bars
    pub fn badge(&self) -> &'static str {
        match self {
            ExitType::Ipo => "IPO",
            ExitType::Acquisition => "ACQ",
        }
    }
}

/// A company exit (IPO or acquisition) that happened during a position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exit {
    #[serde(rename = "type")]
    pub exit_type: ExitType,

    /// The acquiring company (acquisitions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    pub details: String,
}

/// An image shown alongside an achievement
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementImage {
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Something accomplished during a position
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    id: AchievementId,
    title: String,
    description: String,
    images: Vec<AchievementImage>,
}

impl Achievement {
    /// Create an achievement
    pub fn from(
        id: AchievementId,
        title: String,
        description: String,
        images: Vec<AchievementImage>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            images,
        }
    }

    /// Create an achievement from nothing but a title.  The ID is a slug of
    /// the title.
    pub fn from_title(title: &str) -> Result<Self, IdError> {
        Ok(Self::from(
            AchievementId::from(slugify(title))?,
            title.trim().to_string(),
            String::new(),
            Vec::new(),
        ))
    }

    pub fn id(&self) -> &AchievementId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn images(&self) -> &[AchievementImage] {
        &self.images
    }
}

/// Used only by the custom deserialiser.  Achievements are either full
/// objects or just a title.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAchievement {
    Title(String),
    Full {
        id: AchievementId,
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        images: Vec<AchievementImage>,
    },
}

impl<'de> Deserialize<'de> for Achievement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAchievement::deserialize(deserializer)? {
            RawAchievement::Title(title) => {
                Achievement::from_title(&title).map_err(serde::de::Error::custom)
            }
            RawAchievement::Full {
                id,
                title,
                description,
                images,
            } => Ok(Achievement::from(id, title, description, images)),
        }
    }
}

/// A career position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: PositionId,
    pub title: String,
    pub company: String,

    /// e.g. `2020 - 2022` or `March 2021 - Present`
    pub period: String,

    pub location: String,

    /// One-line summary
    #[serde(default)]
    pub blurb: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub image_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub achievements: Vec<Achievement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<Exit>,
}

impl Position {
    /// Parse the position's period.  Ongoing positions are resolved against
    /// the clock each time this is called.
    pub fn parsed_period(&self, clock: &dyn Clock) -> ParsedPeriod {
        parse_period(&self.period, clock)
    }

    /// Find one of the position's achievements
    pub fn achievement(&self, id: &AchievementId) -> Option<&Achievement> {
        self.achievements
            .iter()
            .find(|achievement| achievement.id() == id)
    }

    /// Whether one of the position's achievements has the ID
    pub fn has_achievement(&self, id: &AchievementId) -> bool {
        self.achievement(id).is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::position;
    use crate::{Date, FixedClock};

    #[test]
    fn deserialise_full() {
        let json = r#"{
            "id": "design-lead-fintech",
            "title": "Senior Design Lead",
            "company": "FinanceFlow",
            "period": "2020 - 2022",
            "location": "New York, NY",
            "blurb": "Transforming financial services",
            "description": "Led product design",
            "tags": ["full-stack ux"],
            "imageUrl": "https://example.com/a.jpg",
            "achievements": [
                {
                    "id": "platform",
                    "title": "Designed platform",
                    "description": "Processing $2B+ monthly",
                    "images": [{"url": "https://example.com/b.jpg", "alt": "Dashboard"}]
                }
            ],
            "exit": {"type": "Acquisition", "company": "BigBank", "details": "Acquired for $300M"}
        }"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.id.as_str(), "design-lead-fintech");
        assert_eq!(position.achievements.len(), 1);
        assert_eq!(position.achievements[0].images()[0].caption, None);
        let exit = position.exit.as_ref().unwrap();
        assert_eq!(exit.exit_type, ExitType::Acquisition);
        assert_eq!(exit.exit_type.badge(), "ACQ");
        assert_eq!(exit.company.as_deref(), Some("BigBank"));
    }

    #[test]
    fn deserialise_title_only_achievements() {
        let json = r#"{
            "id": "pm",
            "title": "Senior Product Manager",
            "company": "StartupVenture",
            "period": "2018 - 2020",
            "location": "Austin, TX",
            "achievements": ["Led product strategy resulting in successful IPO"],
            "exit": {"type": "IPO", "details": "NASDAQ"}
        }"#;
        let position: Position = serde_json::from_str(json).unwrap();
        let achievement = &position.achievements[0];
        assert_eq!(
            achievement.id().as_str(),
            "led-product-strategy-resulting-in-successful-ipo"
        );
        assert_eq!(achievement.description(), "");
        assert_eq!(position.exit.unwrap().exit_type, ExitType::Ipo);
    }

    #[test]
    fn bad_ids_are_rejected() {
        let json = r#"{"id": "a,b", "title": "", "company": "", "period": "", "location": ""}"#;
        assert!(serde_json::from_str::<Position>(json).is_err());
    }

    #[test]
    fn parsed_period() {
        let clock = FixedClock(Date::from(1, 1, 2024).unwrap());
        let position = position("p2", "2022 - Present");
        assert_eq!(position.parsed_period(&clock).duration, 24);
    }

    #[test]
    fn achievement_lookup() {
        let mut position = position("p1", "2020 - 2022");
        position.achievements = vec![Achievement::from_title("Shipped v2").unwrap()];
        let id = AchievementId::from("shipped-v2").unwrap();
        assert!(position.has_achievement(&id));
        assert_eq!(position.achievement(&id).unwrap().title(), "Shipped v2");
        assert!(!position.has_achievement(&AchievementId::from("other").unwrap()));
    }
}
