//! Application layer - Use cases and orchestration

pub mod export;
pub mod history;
pub mod init;
pub mod log_mood;
pub mod manage_settings;
pub mod reminder;
pub mod reset;
pub mod summary;

pub use export::{ExportFormat, ExportService};
pub use history::HistoryService;
pub use log_mood::{LogMoodService, LogRequest, SaveOutcome};
pub use manage_settings::SettingsService;
pub use summary::{PeriodStats, Summary, SummaryService};
