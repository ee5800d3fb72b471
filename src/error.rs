//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(i64),

    #[error("Invalid color: {0} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("No mood entry for {0}")]
    EntryNotFound(String),

    #[error("No mood data to export")]
    NoData,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodError::NotMoodlogDirectory(_) => 2,
            MoodError::InvalidDate(_)
            | MoodError::InvalidRating(_)
            | MoodError::InvalidColor(_)
            | MoodError::InvalidPeriod(_)
            | MoodError::OutOfRange(_) => 3,
            MoodError::EntryNotFound(_) | MoodError::NoData => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to start a mood journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-03-15)\n\n\
                    Examples:\n\
                    moodlog log 4 --date yesterday\n\
                    moodlog show 2024-03-15",
                    input
                )
            }
            MoodError::InvalidRating(rating) => {
                format!(
                    "Invalid rating: {}\n\n\
                    Ratings go from 1 to 5:\n\
                    • 1 Terrible  • 2 Bad  • 3 Okay  • 4 Good  • 5 Great",
                    rating
                )
            }
            MoodError::InvalidPeriod(period) => {
                format!(
                    "Invalid period: '{}'\n\n\
                    Valid periods: week, month, year\n\
                    Example: moodlog summary month",
                    period
                )
            }
            MoodError::OutOfRange(what) => {
                format!(
                    "Out of range: {}\n\n\
                    The result falls outside the supported calendar.\n\
                    Try a smaller --back value or a closer --date.",
                    what
                )
            }
            MoodError::TomlDeserialize(e) => {
                format!(
                    "Could not read .moodlog/settings.toml: {}\n\n\
                    Fix the file by hand, or set values again with:\n\
                    moodlog settings <key> <value>",
                    e
                )
            }
            MoodError::EntryNotFound(date) => {
                format!(
                    "No mood entry for {}\n\n\
                    Suggestions:\n\
                    • Use 'moodlog list' to see logged days\n\
                    • Log one with: moodlog log <rating> --date {}",
                    date, date
                )
            }
            MoodError::NoData => "No mood data to export\n\n\
                Log a mood first: moodlog log 3"
                .to_string(),
            MoodError::Config(msg) => {
                if msg.contains("Invalid theme") {
                    format!(
                        "{}\n\n\
                        Valid themes: light, dark, system\n\
                        Example: moodlog settings theme dark",
                        msg
                    )
                } else if msg.contains("time format") {
                    format!(
                        "{}\n\n\
                        Expected format: HH:MM (24h)\n\
                        Example: moodlog settings reminder-time 20:00",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodError
pub type Result<T> = std::result::Result<T, MoodError>;
