//! Application settings and theme palettes

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const REMINDER_TIME_FORMAT: &str = "%H:%M";

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the terminal/device preference
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Decide whether the dark palette applies. `system_dark` is the detected
    /// device preference and only matters in `System` mode.
    pub fn is_dark(&self, system_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_dark,
        }
    }

    /// The mode a light/dark toggle switches to
    pub fn toggled(&self, system_dark: bool) -> ThemeMode {
        if self.is_dark(system_dark) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(format!(
                "Invalid theme: '{}'. Valid themes are: light, dark, system",
                s
            )),
        }
    }
}

/// Named colors of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub input_background: &'static str,
    pub error_text: &'static str,
}

pub const LIGHT_COLORS: ThemeColors = ThemeColors {
    primary: "#4a56e2",
    accent: "#f97316",
    background: "#f8fafc",
    card: "#ffffff",
    text: "#1e293b",
    text_secondary: "#64748b",
    border: "#e2e8f0",
    input_background: "#f1f5f9",
    error_text: "#ef4444",
};

pub const DARK_COLORS: ThemeColors = ThemeColors {
    primary: "#6366f1",
    accent: "#f97316",
    background: "#0f172a",
    card: "#1e293b",
    text: "#f8fafc",
    text_secondary: "#94a3b8",
    border: "#334155",
    input_background: "#1e293b",
    error_text: "#ef4444",
};

impl ThemeColors {
    pub fn for_mode(mode: ThemeMode, system_dark: bool) -> &'static ThemeColors {
        if mode.is_dark(system_dark) {
            &DARK_COLORS
        } else {
            &LIGHT_COLORS
        }
    }
}

fn default_notification_time() -> String {
    "20:00".to_string()
}

/// User preferences. Missing keys fall back to defaults when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub notifications_enabled: bool,
    /// Daily reminder time, `HH:MM`
    #[serde(default = "default_notification_time")]
    pub notification_time: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            theme: ThemeMode::System,
            notifications_enabled: false,
            notification_time: default_notification_time(),
        }
    }
}

impl AppSettings {
    /// Parsed reminder time, None if the stored value is malformed
    pub fn reminder_time(&self) -> Option<NaiveTime> {
        parse_reminder_time(&self.notification_time)
    }
}

pub fn parse_reminder_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), REMINDER_TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, ThemeMode::System);
        assert!(!settings.notifications_enabled);
        assert_eq!(settings.notification_time, "20:00");
        assert_eq!(
            settings.reminder_time(),
            NaiveTime::from_hms_opt(20, 0, 0)
        );
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: AppSettings = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(!settings.notifications_enabled);
        assert_eq!(settings.notification_time, "20:00");
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::from_str("Dark").unwrap(), ThemeMode::Dark);
        assert!(ThemeMode::from_str("blue").unwrap_err().contains("Invalid theme"));
    }

    #[test]
    fn test_theme_resolution() {
        assert!(!ThemeMode::Light.is_dark(true));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(ThemeMode::System.is_dark(true));
        assert_eq!(ThemeColors::for_mode(ThemeMode::System, false).background, "#f8fafc");
        assert_eq!(ThemeColors::for_mode(ThemeMode::Dark, false).background, "#0f172a");
    }

    #[test]
    fn test_toggle_from_system() {
        assert_eq!(ThemeMode::System.toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::System.toggled(false), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(false), ThemeMode::Light);
    }

    #[test]
    fn test_reminder_time_parse() {
        assert_eq!(parse_reminder_time("07:30"), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(parse_reminder_time("25:00"), None);
        assert_eq!(parse_reminder_time("8pm"), None);
    }
}
