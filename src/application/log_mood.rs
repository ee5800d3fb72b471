//! Log mood use case

use crate::domain::entry::{is_hex_color, validate_rating};
use crate::domain::{MoodEntry, MoodLevel, DATE_FORMAT};
use crate::error::{MoodError, Result};
use crate::infrastructure::MoodRepository;
use chrono::{NaiveDate, Utc};

/// Input for saving a day's mood
#[derive(Debug, Clone)]
pub struct LogRequest {
    pub date: NaiveDate,
    pub rating: i64,
    pub note: Option<String>,
    pub color: Option<String>,
}

/// Whether a save created a new day or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Service for saving mood entries
pub struct LogMoodService<R: MoodRepository> {
    repository: R,
}

impl<R: MoodRepository> LogMoodService<R> {
    pub fn new(repository: R) -> Self {
        LogMoodService { repository }
    }

    /// Validate and save an entry, replacing any entry already stored for that date
    pub fn execute(&self, request: LogRequest, today: NaiveDate) -> Result<(MoodEntry, SaveOutcome)> {
        if request.date > today {
            return Err(MoodError::InvalidDate(format!(
                "{} is in the future",
                request.date.format(DATE_FORMAT)
            )));
        }

        let rating = validate_rating(request.rating)?;
        let color = match request.color {
            Some(color) if !is_hex_color(&color) => return Err(MoodError::InvalidColor(color)),
            Some(color) => color,
            None => MoodLevel::for_rating(rating)
                .map(|level| level.color.to_string())
                .unwrap_or_default(),
        };

        let mut entry = MoodEntry::new(request.date, rating).with_color(color);
        entry.note = request.note.filter(|n| !n.trim().is_empty());
        entry.timestamp = Some(Utc::now());

        let mut entries = self.repository.load_entries()?;
        let outcome = upsert_entry(&mut entries, entry.clone());
        self.repository.save_entries(&entries)?;

        tracing::info!(date = %entry.date, rating, ?outcome, "mood saved");
        Ok((entry, outcome))
    }
}

/// Insert `entry`, or replace the stored entry with the same date in place
pub fn upsert_entry(entries: &mut Vec<MoodEntry>, entry: MoodEntry) -> SaveOutcome {
    match entries.iter_mut().find(|e| e.date == entry.date) {
        Some(existing) => {
            *existing = entry;
            SaveOutcome::Updated
        }
        None => {
            entries.push(entry);
            SaveOutcome::Created
        }
    }
}
