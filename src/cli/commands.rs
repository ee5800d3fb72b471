//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Daily mood journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Log (or replace) the mood for a day
    Log {
        /// Rating from 1 (terrible) to 5 (great)
        #[arg(allow_negative_numbers = true)]
        rating: i64,

        /// Day to log (e.g., today, yesterday, last friday, 2024-03-15)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,

        /// Display color as #RRGGBB (defaults to the rating's color)
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Show the entry for a day
    Show {
        #[arg(default_value = "today")]
        date: String,
    },

    /// Show today's mood
    Today,

    /// Delete the entry for a day
    Delete { date: String },

    /// List logged days, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Summarize moods for a week, month, or year
    Summary {
        /// Period to summarize (week, month, year)
        #[arg(default_value = "week")]
        period: String,

        /// Any day inside the period
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Step back this many periods
        #[arg(short, long, default_value_t = 0)]
        back: u32,
    },

    /// View or modify settings
    Settings {
        /// Setting key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all settings
        #[arg(short, long)]
        list: bool,
    },

    /// Export all entries to a file
    Export {
        /// Output format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Directory to write the export into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Delete all mood entries (settings are kept)
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show when the next daily reminder is due
    Reminder,
}
