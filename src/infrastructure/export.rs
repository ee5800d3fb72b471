//! Export writers

use crate::domain::MoodEntry;
use crate::error::Result;
use std::io::Write;

/// Write entries as a pretty-printed JSON array
pub fn write_json<W: Write>(entries: &[MoodEntry], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write entries as CSV with a `Date,Rating,Color,Note` header
pub fn write_csv<W: Write>(entries: &[MoodEntry], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Date", "Rating", "Color", "Note"])?;

    for entry in entries {
        let rating = entry.rating.to_string();
        csv_writer.write_record([
            entry.date.as_str(),
            rating.as_str(),
            entry.color.as_deref().unwrap_or(""),
            entry.note.as_deref().unwrap_or(""),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
