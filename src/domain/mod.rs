//! Domain layer - Mood entries, periods and aggregation

pub mod aggregate;
pub mod entry;
pub mod period;
pub mod settings;
pub mod time_ref;
pub mod window;

pub use aggregate::{group_by_period, PeriodBucket};
pub use entry::{MoodEntry, MoodLevel, DATE_FORMAT};
pub use period::Period;
pub use settings::{AppSettings, ThemeColors, ThemeMode};
pub use time_ref::TimeReference;
pub use window::{resolve_window, resolve_window_at, DateWindow};
