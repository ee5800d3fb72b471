//! Daily reminder scheduling

use crate::domain::AppSettings;
use crate::error::{MoodError, Result};
use chrono::{Duration, NaiveDateTime};

pub const REMINDER_TITLE: &str = "Time to log your mood!";
pub const REMINDER_BODY: &str = "How are you feeling today? Take a moment to record your mood.";

/// A scheduled reminder occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub at: NaiveDateTime,
    pub title: &'static str,
    pub body: &'static str,
}

/// Next reminder after `now`, or None when reminders are off.
///
/// Fires today if the configured time is still ahead, otherwise tomorrow.
pub fn next_reminder(settings: &AppSettings, now: NaiveDateTime) -> Result<Option<Reminder>> {
    if !settings.notifications_enabled {
        return Ok(None);
    }

    let time = settings.reminder_time().ok_or_else(|| {
        MoodError::Config(format!(
            "Invalid time format in settings: '{}'",
            settings.notification_time
        ))
    })?;

    let today_at = now.date().and_time(time);
    let at = if today_at > now {
        today_at
    } else {
        today_at + Duration::days(1)
    };

    Ok(Some(Reminder {
        at,
        title: REMINDER_TITLE,
        body: REMINDER_BODY,
    }))
}
