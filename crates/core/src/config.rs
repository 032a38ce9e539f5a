// SPDX-License-Identifier: MIT

//!
//! Folio config
//!

use crate::{Clock, Date, FixedClock, SystemClock};
use directories_next::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "Folio";
const APPLICATION_NAME: &str = "Folio";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_DATA_DIR: &str = "data";

/// Errors that can occur when loading or saving the config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory for us
    #[error("Unable to determine the config directory")]
    NoConfigDir,

    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// How open achievements are written to the `achievement` query parameter
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKeyStyle {
    /// Just the achievement ID (`a1`).  Achievements that share an ID across
    /// positions can't be told apart.
    #[default]
    Flat,

    /// Position ID and achievement ID (`p1:a1`)
    Namespaced,
}

/// The config that's saved to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `portfolio.json`, `about.json` and `files.json`
    pub data_dir: PathBuf,

    /// How open achievements are written to URLs
    pub achievement_keys: AchievementKeyStyle,

    /// How many tags to show before "+N more"
    pub tag_preview_limit: usize,

    /// How many achievement image thumbnails to show before "+N"
    pub thumbnail_preview_limit: usize,

    /// Pretend today is this date (for reproducible output)
    pub now: Option<Date>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            achievement_keys: AchievementKeyStyle::Flat,
            tag_preview_limit: 4,
            thumbnail_preview_limit: 3,
            now: None,
        }
    }
}

impl Config {
    /// Where the config lives unless told otherwise
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let project_dirs = ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config at the path, or the defaults if there's no file there
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Save the config to the path (creating parent directories)
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        File::create(path)?.write_all(json.as_bytes())?;
        info!("Config saved to {}", path.display());
        Ok(())
    }

    /// The clock to resolve "Present" with
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.now {
            Some(now) => Box::new(FixedClock(now)),
            None => Box::new(SystemClock),
        }
    }
}
