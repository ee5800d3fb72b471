//! Date reference parsing and resolution

use crate::domain::DATE_FORMAT;
use crate::error::{MoodError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied date that resolves relative to a base date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            "tomorrow" => Ok(TimeReference::Tomorrow),
            _ if normalized.starts_with("last ") => parse_weekday(&normalized[5..])
                .map(TimeReference::LastWeekday)
                .ok_or_else(|| MoodError::InvalidDate(input.to_string())),
            _ => {
                if let Some(day) = parse_weekday(&normalized) {
                    return Ok(TimeReference::Weekday(day));
                }
                NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| MoodError::InvalidDate(input.to_string()))
            }
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Tomorrow => base_date + Duration::days(1),
            TimeReference::Weekday(target) => base_date - Duration::days(days_back(base_date, *target, 0)),
            TimeReference::LastWeekday(target) => {
                base_date - Duration::days(days_back(base_date, *target, 7))
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

/// Days from the most recent `target` back to `base`; `same_day` is used when they coincide
fn days_back(base: NaiveDate, target: Weekday, same_day: i64) -> i64 {
    let days = (base.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7;
    if days == 0 {
        same_day
    } else {
        days as i64
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse and resolve a reference against `base_date` in one step
pub fn resolve_date(input: &str, base_date: NaiveDate) -> Result<NaiveDate> {
    TimeReference::parse(input).map(|r| r.resolve(base_date))
}
