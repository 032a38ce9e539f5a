// SPDX-License-Identifier: MIT

//!
//! The about page: biography, skills, values, education, awards & interests
//!

use crate::PortfolioError;
use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Icons that values can be drawn with.  Unknown icon names fail to load
/// rather than render as nothing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueIcon {
    Users,
    Users2,
    RefreshCw,
    Heart,
}

impl ValueIcon {
    /// Name of the icon in the icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            ValueIcon::Users => "users",
            ValueIcon::Users2 => "users-2",
            ValueIcon::RefreshCw => "refresh-cw",
            ValueIcon::Heart => "heart",
        }
    }
}

/// What area a skill belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkillArea {
    Design,
    Research,
    Tools,
    Development,
    Strategy,
    Leadership,
}

/// A skill proficiency percentage (0 to 100)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The level as a fraction in `[0, 1]` (e.g. for bar widths)
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<i64> for SkillLevel {
    type Error = String;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=100).contains(&value) {
            Ok(SkillLevel(value as u8))
        } else {
            Err(format!("Skill level `{value}` is not between 0 and 100"))
        }
    }
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        SkillLevel::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub profile_image: String,
    pub location: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BiographySection {
    pub id: String,
    pub title: String,
    /// Paragraphs
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillArea,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Value {
    pub title: String,
    pub description: String,
    pub icon: ValueIcon,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PersonalInterest {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WorkPhilosophy {
    pub title: String,
    pub content: Vec<String>,
}

/// Everything shown on the about page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub biography: Vec<BiographySection>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub interests: Vec<PersonalInterest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_philosophy: Option<WorkPhilosophy>,
}

impl AboutData {
    /// Load the about page data from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PortfolioError> {
        let path = path.as_ref();
        info!("Loading about page data from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Every skill in the area, across all categories
    pub fn skills_in_area(&self, area: SkillArea) -> impl Iterator<Item = &Skill> {
        self.skill_categories
            .iter()
            .flat_map(|category| category.skills.iter())
            .filter(move |skill| skill.category == area)
    }
}
