//! Output formatting utilities

use crate::application::reminder::Reminder;
use crate::application::Summary;
use crate::domain::{MoodEntry, MoodLevel, PeriodBucket, ThemeColors, DATE_FORMAT};
use crate::infrastructure::Config;

const BAR_WIDTH: usize = 5;

fn mood_bar(mood: Option<u8>) -> String {
    let filled = mood.map(|m| m as usize).unwrap_or(0).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn mood_name(rating: u8) -> String {
    match MoodLevel::for_rating(rating) {
        Some(level) => format!("{} {} {}", rating, level.emoji, level.label),
        None => rating.to_string(),
    }
}

/// Format one entry, with its note on a second line
pub fn format_entry(entry: &MoodEntry) -> String {
    let mut output = format!(
        "{}  {}  {}\n",
        entry.date,
        mood_bar(Some(entry.rating)),
        mood_name(entry.rating)
    );
    if let Some(note) = entry.note_text() {
        output.push_str(&format!("            \"{}\"\n", note));
    }
    output
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No mood entries found".to_string();
    }

    entries.iter().map(format_entry).collect()
}

fn format_bucket(bucket: &PeriodBucket, label_width: usize) -> String {
    let mut line = format!(
        "{:<width$}  {}  ",
        bucket.label,
        mood_bar(bucket.mood),
        width = label_width
    );
    match bucket.mood {
        Some(mood) => line.push_str(&mood_name(mood)),
        None => line.push('-'),
    }
    if let Some(note) = &bucket.note {
        line.push_str(&format!("  \"{}\"", note));
    }
    line.push('\n');
    line
}

/// Format a period summary: header, one line per bucket, navigation hints
pub fn format_summary(summary: &Summary) -> String {
    let mut output = summary.window.label.clone();
    if summary.window.is_current_period {
        output.push_str(" (current)");
    }
    output.push('\n');

    let label_width = summary
        .buckets
        .iter()
        .map(|b| b.label.len())
        .max()
        .unwrap_or(0);
    for bucket in &summary.buckets {
        output.push_str(&format_bucket(bucket, label_width));
    }

    match summary.stats() {
        Some(stats) => {
            output.push_str(&format!(
                "\nAverage: {:.1}/5  Highest: {}  Lowest: {}  Rated: {}\n",
                stats.average, stats.highest, stats.lowest, stats.total
            ));
            output.push_str(&format!(
                "Logged {} of {} days ({}%)\n",
                stats.logged_days,
                summary.window.num_days(),
                stats.completion
            ));
        }
        None => output.push_str("No moods logged in this period\n"),
    }

    if let Some(previous) = summary.previous {
        output.push_str(&format!("\nprevious: {}", previous.format(DATE_FORMAT)));
    }
    if let Some(next) = summary.next {
        output.push_str(&format!("\nnext:     {}", next.format(DATE_FORMAT)));
    }
    output.push('\n');
    output
}

/// Format all settings, plus the palette the theme resolves to
pub fn format_settings(config: &Config, system_dark: bool) -> String {
    let settings = &config.settings;
    let colors = ThemeColors::for_mode(settings.theme, system_dark);
    format!(
        "theme = {}\nnotifications = {}\nreminder-time = {}\ncreated = {}\npalette = {} (primary {}, background {})\n",
        settings.theme.as_str(),
        if settings.notifications_enabled { "on" } else { "off" },
        settings.notification_time,
        config.created.to_rfc3339(),
        if settings.theme.is_dark(system_dark) { "dark" } else { "light" },
        colors.primary,
        colors.background,
    )
}

pub fn format_reminder(reminder: Option<&Reminder>) -> String {
    match reminder {
        Some(r) => format!(
            "Next reminder: {}\n{}\n{}\n",
            r.at.format("%Y-%m-%d %H:%M"),
            r.title,
            r.body
        ),
        None => "Reminders are off. Enable them with: moodlog settings notifications on\n"
            .to_string(),
    }
}

/// Guess whether the terminal background is dark from `COLORFGBG` ("fg;bg")
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .map(|bg| bg < 7 || bg == 8)
        .unwrap_or(false)
}
