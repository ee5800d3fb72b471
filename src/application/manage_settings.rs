//! Settings management use case

use crate::domain::settings::parse_reminder_time;
use crate::domain::ThemeMode;
use crate::error::{MoodError, Result};
use crate::infrastructure::{Config, MoodRepository};
use std::str::FromStr;

pub const SETTING_KEYS: &str = "theme, notifications, reminder-time, created";

/// Service for managing journal settings
pub struct SettingsService<R: MoodRepository> {
    repository: R,
}

impl<R: MoodRepository> SettingsService<R> {
    pub fn new(repository: R) -> Self {
        SettingsService { repository }
    }

    /// Get a single setting value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "theme" => Ok(config.settings.theme.as_str().to_string()),
            "notifications" => Ok(on_off(config.settings.notifications_enabled).to_string()),
            "reminder-time" => Ok(config.settings.notification_time.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodError::Config(format!(
                "Unknown setting: '{}'. Valid keys are: {}",
                key, SETTING_KEYS
            ))),
        }
    }

    /// Set a setting value. `system_dark` resolves `theme toggle` under the system theme.
    pub fn set(&self, key: &str, value: &str, system_dark: bool) -> Result<String> {
        let mut config = self.repository.load_config()?;

        match key {
            "theme" => {
                config.settings.theme = if value.eq_ignore_ascii_case("toggle") {
                    config.settings.theme.toggled(system_dark)
                } else {
                    ThemeMode::from_str(value).map_err(MoodError::Config)?
                };
            }
            "notifications" => {
                config.settings.notifications_enabled = parse_switch(value)?;
            }
            "reminder-time" => {
                let time = parse_reminder_time(value).ok_or_else(|| {
                    MoodError::Config(format!("Invalid time format: '{}'", value))
                })?;
                config.settings.notification_time = time.format("%H:%M").to_string();
            }
            "created" => {
                return Err(MoodError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodError::Config(format!(
                    "Unknown setting: '{}'. Valid keys are: theme, notifications, reminder-time",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, "setting updated");
        self.get(key)
    }

    /// Full settings file
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(MoodError::Config(format!(
            "Invalid switch value: '{}'. Use on or off",
            value
        ))),
    }
}
