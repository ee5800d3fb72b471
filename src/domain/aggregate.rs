//! Period aggregation: turn mood entries into display-ready buckets
//!
//! Buckets are computed fresh on every call. Entries are expected to be unique
//! per date; duplicates are not removed and are counted twice in averages.

use crate::domain::window::bounds;
use crate::domain::{MoodEntry, Period, DATE_FORMAT};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Summary of one aggregation slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodBucket {
    pub label: String,
    /// Rounded mean rating, None when nothing contributed
    pub mood: Option<u8>,
    /// Note of the last contributing entry in input order
    pub note: Option<String>,
    /// The day for week buckets; the last contributing entry's date otherwise
    pub date: Option<String>,
}

/// Running sum for a month or year bucket
#[derive(Debug, Default)]
struct Accumulator {
    total: u32,
    count: u32,
    note: Option<String>,
    date: Option<String>,
}

impl Accumulator {
    fn add(&mut self, entry: &MoodEntry) {
        self.total += entry.rating as u32;
        self.count += 1;
        // Last one seen wins, regardless of date order
        self.note = entry.note_text().map(str::to_string);
        self.date = Some(entry.date.clone());
    }

    fn into_bucket(self, label: String) -> PeriodBucket {
        PeriodBucket {
            label,
            mood: rounded_mean(self.total, self.count),
            note: self.note,
            date: self.date,
        }
    }
}

fn rounded_mean(total: u32, count: u32) -> Option<u8> {
    if count == 0 {
        return None;
    }
    Some((total as f64 / count as f64).round() as u8)
}

/// Group entries into buckets for the period containing `reference`.
///
/// - week: 7 buckets, one per day from Sunday to Saturday
/// - month: one bucket per 7-day block of the month, keyed by `(day - 1) / 7`
/// - year: 12 buckets, January to December
/// - day: no buckets
///
/// Entries outside the window, or whose date does not parse, are skipped.
pub fn group_by_period(entries: &[MoodEntry], period: Period, reference: NaiveDate) -> Vec<PeriodBucket> {
    let (start, end) = bounds(reference, period);

    let in_window: Vec<(NaiveDate, &MoodEntry)> = entries
        .iter()
        .filter_map(|entry| entry.parsed_date().map(|date| (date, entry)))
        .filter(|(date, _)| start <= *date && *date <= end)
        .collect();

    match period {
        Period::Week => group_week(&in_window, reference),
        Period::Month => group_month(&in_window, (end - start).num_days() as u32 + 1),
        Period::Year => group_year(&in_window),
        Period::Day => Vec::new(),
    }
}

fn group_week(in_window: &[(NaiveDate, &MoodEntry)], reference: NaiveDate) -> Vec<PeriodBucket> {
    let weekday = reference.weekday().num_days_from_sunday() as i64;
    WEEKDAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            // None only for days past the edge of the calendar
            let day = reference.checked_add_signed(Duration::days(i as i64 - weekday));
            let found = day.and_then(|day| {
                in_window.iter().find(|(date, _)| *date == day).map(|(_, e)| *e)
            });
            PeriodBucket {
                label: label.to_string(),
                mood: found.map(|e| e.rating),
                note: found.and_then(|e| e.note_text()).map(str::to_string),
                date: day.map(|day| day.format(DATE_FORMAT).to_string()),
            }
        })
        .collect()
}

fn group_month(in_window: &[(NaiveDate, &MoodEntry)], days: u32) -> Vec<PeriodBucket> {
    let weeks = days.div_ceil(7) as usize;

    let mut slots: Vec<Accumulator> = (0..weeks).map(|_| Accumulator::default()).collect();
    for (date, entry) in in_window {
        let week_of_month = (date.day0() / 7) as usize;
        if let Some(slot) = slots.get_mut(week_of_month) {
            slot.add(entry);
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.into_bucket(format!("Week {}", i + 1)))
        .collect()
}

fn group_year(in_window: &[(NaiveDate, &MoodEntry)]) -> Vec<PeriodBucket> {
    let mut slots: Vec<Accumulator> = (0..12).map(|_| Accumulator::default()).collect();
    for (date, entry) in in_window {
        slots[date.month0() as usize].add(entry);
    }

    slots
        .into_iter()
        .zip(MONTH_LABELS)
        .map(|(slot, label)| slot.into_bucket(label.to_string()))
        .collect()
}
