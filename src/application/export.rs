//! Export use case

use crate::error::{MoodError, Result};
use crate::infrastructure::export::{write_csv, write_json};
use crate::infrastructure::MoodRepository;
use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!(
                "Invalid export format: '{}'. Valid formats are: json, csv",
                s
            )),
        }
    }
}

/// File name used for an export made on `date`
pub fn export_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "mood_tracker_export_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Service writing all entries to an export file
pub struct ExportService<R: MoodRepository> {
    repository: R,
}

impl<R: MoodRepository> ExportService<R> {
    pub fn new(repository: R) -> Self {
        ExportService { repository }
    }

    /// Export every entry into `output_dir`, returning the written path
    pub fn execute(&self, format: ExportFormat, output_dir: &Path, today: NaiveDate) -> Result<PathBuf> {
        let entries = self.repository.load_entries()?;
        if entries.is_empty() {
            return Err(MoodError::NoData);
        }

        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join(export_file_name(format, today));
        let writer = BufWriter::new(File::create(&path)?);

        match format {
            ExportFormat::Json => write_json(&entries, writer)?,
            ExportFormat::Csv => write_csv(&entries, writer)?,
        }

        tracing::info!(path = %path.display(), count = entries.len(), "exported mood data");
        Ok(path)
    }
}
