//! Window resolution: the concrete date range a period covers

use crate::domain::Period;
use chrono::{Datelike, Duration, Local, Months, NaiveDate};

/// Inclusive date range for a period anchored at a reference date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Display label, e.g. "Mar 10 - Mar 16, 2024" or "March 2024"
    pub label: String,
    /// Whether this window contains the current date
    pub is_current_period: bool,
}

impl DateWindow {
    /// Check whether a date falls within the window (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of days covered by the window
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Resolve the window containing `reference`, judging "current" against today's local date
pub fn resolve_window(reference: NaiveDate, period: Period) -> DateWindow {
    resolve_window_at(reference, period, Local::now().date_naive())
}

/// Resolve the window containing `reference`, judging "current" against `today`
pub fn resolve_window_at(reference: NaiveDate, period: Period, today: NaiveDate) -> DateWindow {
    let (start_date, end_date) = bounds(reference, period);

    let (label, is_current_period) = match period {
        Period::Day => (
            reference.format("%B %-d, %Y").to_string(),
            reference == today,
        ),
        Period::Week => (
            format!(
                "{} - {}",
                start_date.format("%b %-d"),
                end_date.format("%b %-d, %Y")
            ),
            start_date == start_of_week(today),
        ),
        Period::Month => (
            reference.format("%B %Y").to_string(),
            reference.month() == today.month() && reference.year() == today.year(),
        ),
        Period::Year => (
            reference.format("%Y").to_string(),
            reference.year() == today.year(),
        ),
    };

    DateWindow {
        start_date,
        end_date,
        label,
        is_current_period,
    }
}

/// Start and end dates of the period containing `reference`.
///
/// Windows that would reach past the calendar range are cut at
/// `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn bounds(reference: NaiveDate, period: Period) -> (NaiveDate, NaiveDate) {
    match period {
        Period::Day => (reference, reference),
        Period::Week => {
            let weekday = reference.weekday().num_days_from_sunday() as i64;
            let end = reference
                .checked_add_signed(Duration::days(6 - weekday))
                .unwrap_or(NaiveDate::MAX);
            (start_of_week(reference), end)
        }
        Period::Month => {
            let start = reference.with_day(1).unwrap_or(reference);
            let end = start
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(NaiveDate::MAX);
            (start, end)
        }
        Period::Year => {
            let start = reference.with_ordinal(1).unwrap_or(reference);
            let end = NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(NaiveDate::MAX);
            (start, end)
        }
    }
}

/// Sunday starting the week that contains `date`, or `NaiveDate::MIN` when
/// that Sunday is out of range
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_sunday() as i64))
        .unwrap_or(NaiveDate::MIN)
}

/// Move `reference` by `steps` whole periods.
///
/// Month and year steps clamp to the last valid day (Jan 31 + 1 month = Feb 29 in a leap year).
/// Returns None when the result is out of range.
pub fn shift(reference: NaiveDate, period: Period, steps: i32) -> Option<NaiveDate> {
    let months = |n: u32| n.checked_mul(steps.unsigned_abs()).map(Months::new);
    match period {
        Period::Day => reference.checked_add_signed(Duration::days(steps as i64)),
        Period::Week => reference.checked_add_signed(Duration::days(7 * steps as i64)),
        Period::Month | Period::Year => {
            let span = if period == Period::Month { months(1)? } else { months(12)? };
            if steps >= 0 {
                reference.checked_add_months(span)
            } else {
                reference.checked_sub_months(span)
            }
        }
    }
}

/// Reference date for the previous period
pub fn previous_period(reference: NaiveDate, period: Period) -> Option<NaiveDate> {
    shift(reference, period, -1)
}

/// Reference date for the next period, or None when `reference` is already in
/// the period containing `today`. The result never lies past `today`.
pub fn next_period(reference: NaiveDate, period: Period, today: NaiveDate) -> Option<NaiveDate> {
    if resolve_window_at(reference, period, today).is_current_period {
        return None;
    }
    let candidate = shift(reference, period, 1)?;
    let (start, _) = bounds(candidate, period);
    if start > today {
        return None;
    }
    Some(candidate.min(today))
}
