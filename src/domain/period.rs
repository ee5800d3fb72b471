//! Aggregation granularity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Period selector for windows and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// A single calendar day. Only meaningful for window resolution.
    Day,
    /// Sunday through Saturday
    #[default]
    Week,
    /// First to last day of a calendar month
    Month,
    /// January 1 to December 31
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            _ => Err(format!(
                "Invalid period: '{}'. Valid periods are: day, week, month, year",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_periods() {
        assert_eq!(Period::from_str("week").unwrap(), Period::Week);
        assert_eq!(Period::from_str("Month").unwrap(), Period::Month);
        assert_eq!(Period::from_str(" year ").unwrap(), Period::Year);
        assert_eq!(Period::from_str("day").unwrap(), Period::Day);
    }

    #[test]
    fn test_parse_invalid_period() {
        let err = Period::from_str("fortnight").unwrap_err();
        assert!(err.contains("fortnight"));
    }

    #[test]
    fn test_display_round_trips() {
        for period in [Period::Day, Period::Week, Period::Month, Period::Year] {
            assert_eq!(Period::from_str(&period.to_string()).unwrap(), period);
        }
    }
}
