//! Settings file management

use crate::domain::AppSettings;
use crate::error::{MoodError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the directory holding journal state
pub const STATE_DIR: &str = ".moodlog";
pub const SETTINGS_FILE: &str = "settings.toml";

/// Contents of `.moodlog/settings.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub settings: AppSettings,
}

impl Config {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            settings: AppSettings::default(),
        }
    }

    /// Load config from .moodlog/settings.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STATE_DIR).join(SETTINGS_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .moodlog/settings.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(STATE_DIR);
        let config_path = state_dir.join(SETTINGS_FILE);

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;
        tracing::debug!(path = %config_path.display(), "settings saved");

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
