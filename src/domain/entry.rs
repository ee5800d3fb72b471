//! Mood entries and the fixed mood scale

use crate::error::{MoodError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Canonical storage format for entry dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single day's mood record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(alias = "mood")]
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Instant of the last save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, rating: u8) -> Self {
        MoodEntry {
            date: date.format(DATE_FORMAT).to_string(),
            rating,
            note: None,
            color: None,
            timestamp: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Parse the stored date. Returns None for malformed values.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Note text, treating an empty note as absent
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

/// One step of the five-point mood scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodLevel {
    pub value: u8,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

pub const MOOD_LEVELS: [MoodLevel; 5] = [
    MoodLevel { value: 1, label: "Terrible", emoji: "😞", color: "#e63946" },
    MoodLevel { value: 2, label: "Bad", emoji: "😕", color: "#f59e0b" },
    MoodLevel { value: 3, label: "Okay", emoji: "😐", color: "#6b91e3" },
    MoodLevel { value: 4, label: "Good", emoji: "🙂", color: "#34d399" },
    MoodLevel { value: 5, label: "Great", emoji: "😄", color: "#8b5cf6" },
];

impl MoodLevel {
    /// Look up the level for a rating; None outside 1..=5
    pub fn for_rating(rating: u8) -> Option<&'static MoodLevel> {
        MOOD_LEVELS.iter().find(|level| level.value == rating)
    }
}

/// Validate a raw rating coming from user input
pub fn validate_rating(rating: i64) -> Result<u8> {
    match u8::try_from(rating) {
        Ok(r) if MoodLevel::for_rating(r).is_some() => Ok(r),
        _ => Err(MoodError::InvalidRating(rating)),
    }
}

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"))
}

/// Check a display color is `#RRGGBB`
pub fn is_hex_color(color: &str) -> bool {
    hex_color_regex().is_match(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_date() {
        let entry = MoodEntry::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 4);
        assert_eq!(entry.date, "2024-03-15");
        assert_eq!(entry.parsed_date(), NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_malformed_date_is_none() {
        let mut entry = MoodEntry::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 4);
        entry.date = "2024-13-45".to_string();
        assert_eq!(entry.parsed_date(), None);
    }

    #[test]
    fn test_empty_note_is_absent() {
        let entry = MoodEntry::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 4).with_note("");
        assert_eq!(entry.note_text(), None);
    }

    #[test]
    fn test_deserialize_legacy_mood_field() {
        let entry: MoodEntry =
            serde_json::from_str(r#"{"date":"2024-01-01","mood":2,"note":"tired"}"#).unwrap();
        assert_eq!(entry.rating, 2);
        assert_eq!(entry.note.as_deref(), Some("tired"));
        assert_eq!(entry.color, None);
    }

    #[test]
    fn test_mood_levels() {
        assert_eq!(MoodLevel::for_rating(1).unwrap().label, "Terrible");
        assert_eq!(MoodLevel::for_rating(3).unwrap().color, "#6b91e3");
        assert_eq!(MoodLevel::for_rating(5).unwrap().label, "Great");
        assert!(MoodLevel::for_rating(0).is_none());
        assert!(MoodLevel::for_rating(6).is_none());
    }

    #[test]
    fn test_validate_rating() {
        assert_eq!(validate_rating(4).unwrap(), 4);
        assert!(matches!(validate_rating(0), Err(MoodError::InvalidRating(0))));
        assert!(matches!(validate_rating(6), Err(MoodError::InvalidRating(6))));
        assert!(matches!(validate_rating(-1), Err(MoodError::InvalidRating(-1))));
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#34d399"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("34d399"));
        assert!(!is_hex_color("#fff"));
        assert!(!is_hex_color("#gggggg"));
    }
}
