//! Browse and edit logged entries

use crate::domain::{MoodEntry, DATE_FORMAT};
use crate::error::{MoodError, Result};
use crate::infrastructure::MoodRepository;
use chrono::NaiveDate;
use std::cmp::Reverse;

/// Service for reading and deleting individual entries
pub struct HistoryService<R: MoodRepository> {
    repository: R,
}

impl<R: MoodRepository> HistoryService<R> {
    pub fn new(repository: R) -> Self {
        HistoryService { repository }
    }

    /// Entry stored for a date, if any
    pub fn find(&self, date: NaiveDate) -> Result<Option<MoodEntry>> {
        let key = date.format(DATE_FORMAT).to_string();
        Ok(self
            .repository
            .load_entries()?
            .into_iter()
            .find(|e| e.date == key))
    }

    /// Entry stored for a date, or `EntryNotFound`
    pub fn show(&self, date: NaiveDate) -> Result<MoodEntry> {
        self.find(date)?
            .ok_or_else(|| MoodError::EntryNotFound(date.format(DATE_FORMAT).to_string()))
    }

    /// Remove the entry for a date
    pub fn delete(&self, date: NaiveDate) -> Result<MoodEntry> {
        let key = date.format(DATE_FORMAT).to_string();
        let mut entries = self.repository.load_entries()?;

        let index = entries
            .iter()
            .position(|e| e.date == key)
            .ok_or_else(|| MoodError::EntryNotFound(key.clone()))?;
        let removed = entries.remove(index);

        self.repository.save_entries(&entries)?;
        tracing::info!(date = %key, "mood entry deleted");
        Ok(removed)
    }

    /// Entries newest first. Entries with unreadable dates go last.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<MoodEntry>> {
        let mut entries = self.repository.load_entries()?;
        entries.sort_by_key(|e| Reverse(e.parsed_date()));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::infrastructure::FileSystemRepository;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service_with(temp: &TempDir, entries: &[MoodEntry]) -> HistoryService<FileSystemRepository> {
        let repo = init(temp.path()).unwrap();
        repo.save_entries(entries).unwrap();
        HistoryService::new(repo)
    }

    #[test]
    fn test_show_and_missing() {
        let temp = TempDir::new().unwrap();
        let service = service_with(&temp, &[MoodEntry::new(date(2024, 3, 1), 3)]);

        assert_eq!(service.show(date(2024, 3, 1)).unwrap().rating, 3);
        assert!(matches!(
            service.show(date(2024, 3, 2)),
            Err(MoodError::EntryNotFound(d)) if d == "2024-03-02"
        ));
        assert!(service.find(date(2024, 3, 2)).unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let temp = TempDir::new().unwrap();
        let service = service_with(
            &temp,
            &[
                MoodEntry::new(date(2024, 3, 1), 3),
                MoodEntry::new(date(2024, 3, 2), 4),
            ],
        );

        let removed = service.delete(date(2024, 3, 1)).unwrap();
        assert_eq!(removed.rating, 3);
        assert_eq!(service.list(None).unwrap().len(), 1);
        assert!(service.delete(date(2024, 3, 1)).is_err());
    }

    #[test]
    fn test_list_newest_first_with_limit() {
        let temp = TempDir::new().unwrap();
        let mut broken = MoodEntry::new(date(2024, 1, 1), 1);
        broken.date = "garbage".to_string();
        let service = service_with(
            &temp,
            &[
                MoodEntry::new(date(2024, 3, 2), 4),
                broken,
                MoodEntry::new(date(2024, 3, 9), 5),
                MoodEntry::new(date(2024, 2, 20), 2),
            ],
        );

        let dates: Vec<String> = service.list(None).unwrap().into_iter().map(|e| e.date).collect();
        assert_eq!(dates, ["2024-03-09", "2024-03-02", "2024-02-20", "garbage"]);

        assert_eq!(service.list(Some(2)).unwrap().len(), 2);
    }
}
