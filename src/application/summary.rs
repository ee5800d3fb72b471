//! Period summary use case

use crate::domain::window::{next_period, previous_period, shift};
use crate::domain::{group_by_period, resolve_window_at, DateWindow, Period, PeriodBucket};
use crate::error::{MoodError, Result};
use crate::infrastructure::MoodRepository;
use chrono::NaiveDate;

/// Aggregated view of one period plus navigation targets
#[derive(Debug, Clone)]
pub struct Summary {
    pub period: Period,
    pub window: DateWindow,
    pub buckets: Vec<PeriodBucket>,
    /// Reference date of the previous period
    pub previous: Option<NaiveDate>,
    /// Reference date of the next period; None while viewing the current one
    pub next: Option<NaiveDate>,
    /// Stored entries dated inside the window
    pub logged_days: usize,
}

/// Figures over the buckets of one summary
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStats {
    /// Mean of the bucket moods
    pub average: f64,
    pub highest: u8,
    pub lowest: u8,
    /// Buckets that have a mood
    pub total: usize,
    pub logged_days: usize,
    /// Share of the window's days with an entry, 0-100
    pub completion: u8,
}

impl Summary {
    /// Buckets that have a mood
    pub fn filled(&self) -> impl Iterator<Item = &PeriodBucket> {
        self.buckets.iter().filter(|b| b.mood.is_some())
    }

    /// Average, extremes and completion, or None when no bucket has a mood
    pub fn stats(&self) -> Option<PeriodStats> {
        let moods: Vec<u8> = self.filled().filter_map(|b| b.mood).collect();
        let highest = moods.iter().copied().max()?;
        let lowest = moods.iter().copied().min()?;
        let sum: u32 = moods.iter().map(|&m| m as u32).sum();

        let days = self.window.num_days().max(1) as f64;
        let completion = (self.logged_days as f64 / days * 100.0).round().min(100.0) as u8;

        Some(PeriodStats {
            average: sum as f64 / moods.len() as f64,
            highest,
            lowest,
            total: moods.len(),
            logged_days: self.logged_days,
            completion,
        })
    }
}

/// Service producing period summaries from the stored entries
pub struct SummaryService<R: MoodRepository> {
    repository: R,
}

impl<R: MoodRepository> SummaryService<R> {
    pub fn new(repository: R) -> Self {
        SummaryService { repository }
    }

    /// Summarize the period containing `reference`, moved back by `back` periods
    pub fn execute(
        &self,
        period: Period,
        reference: NaiveDate,
        back: u32,
        today: NaiveDate,
    ) -> Result<Summary> {
        if period == Period::Day {
            return Err(MoodError::InvalidPeriod(period.to_string()));
        }

        let out_of_range =
            || MoodError::OutOfRange(format!("{} {}s back from {}", back, period, reference));
        let steps = i32::try_from(back).map_err(|_| out_of_range())?;
        let reference = shift(reference, period, -steps).ok_or_else(out_of_range)?;

        let entries = self.repository.load_entries()?;
        let window = resolve_window_at(reference, period, today);
        let buckets = group_by_period(&entries, period, reference);
        let logged_days = entries
            .iter()
            .filter_map(|e| e.parsed_date())
            .filter(|date| window.contains(*date))
            .count();
        tracing::debug!(%period, %reference, entries = entries.len(), logged_days, "summarized");

        Ok(Summary {
            period,
            window,
            buckets,
            previous: previous_period(reference, period),
            next: next_period(reference, period, today),
            logged_days,
        })
    }
}
