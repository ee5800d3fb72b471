use chrono::Local;
use clap::Parser;
use moodlog::application::manage_settings::SETTING_KEYS;
use moodlog::application::reminder::next_reminder;
use moodlog::application::{
    init::init, reset::reset, ExportFormat, ExportService, HistoryService, LogMoodService,
    LogRequest, SaveOutcome, SettingsService, SummaryService,
};
use moodlog::cli::output::{format_reminder, format_settings, system_prefers_dark};
use moodlog::cli::{format_entry, format_entry_list, format_summary, Cli, Commands};
use moodlog::domain::time_ref::resolve_date;
use moodlog::domain::Period;
use moodlog::error::MoodError;
use moodlog::infrastructure::{FileSystemRepository, MoodRepository};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; `MOODLOG_LOG` overrides the level filter
fn init_logging(verbose: bool) {
    let default = if verbose { "moodlog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MOODLOG_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<(), MoodError> {
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized moodlog journal at {}", path.display());
            Ok(())
        }
        Some(Commands::Log {
            rating,
            date,
            note,
            color,
        }) => {
            let service = LogMoodService::new(FileSystemRepository::discover()?);
            let request = LogRequest {
                date: resolve_date(&date, today)?,
                rating,
                note,
                color,
            };
            let (entry, outcome) = service.execute(request, today)?;
            let verb = match outcome {
                SaveOutcome::Created => "Logged",
                SaveOutcome::Updated => "Updated",
            };
            print!("{} {}", verb, format_entry(&entry));
            Ok(())
        }
        Some(Commands::Show { date }) => {
            let service = HistoryService::new(FileSystemRepository::discover()?);
            let entry = service.show(resolve_date(&date, today)?)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Some(Commands::Today) => {
            let service = HistoryService::new(FileSystemRepository::discover()?);
            match service.find(today)? {
                Some(entry) => print!("{}", format_entry(&entry)),
                None => println!("No mood logged today. Log one with: moodlog log <1-5>"),
            }
            Ok(())
        }
        Some(Commands::Delete { date }) => {
            let service = HistoryService::new(FileSystemRepository::discover()?);
            let removed = service.delete(resolve_date(&date, today)?)?;
            println!("Deleted entry for {}", removed.date);
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let service = HistoryService::new(FileSystemRepository::discover()?);
            let entries = service.list(limit)?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Summary { period, date, back }) => {
            let period = parse_summary_period(&period)?;
            let service = SummaryService::new(FileSystemRepository::discover()?);
            let summary = service.execute(period, resolve_date(&date, today)?, back, today)?;
            print!("{}", format_summary(&summary));
            Ok(())
        }
        Some(Commands::Settings { key, value, list }) => {
            let service = SettingsService::new(FileSystemRepository::discover()?);

            if list {
                print!("{}", format_settings(&service.list()?, system_prefers_dark()));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    let stored = service.set(&k, &v, system_prefers_dark())?;
                    println!("Set {} = {}", k, stored);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: moodlog settings [--list | <key> [<value>]]");
                println!("Valid keys: {}", SETTING_KEYS);
            }
            Ok(())
        }
        Some(Commands::Export { format, output }) => {
            let format = ExportFormat::from_str(&format).map_err(MoodError::Config)?;
            let service = ExportService::new(FileSystemRepository::discover()?);
            let path = service.execute(format, &output, today)?;
            println!("Exported mood data to {}", path.display());
            Ok(())
        }
        Some(Commands::Reset { yes }) => {
            let repo = FileSystemRepository::discover()?;
            if !yes {
                return Err(MoodError::Config(
                    "This deletes all mood entries and cannot be undone. \
                    Re-run with --yes to confirm."
                        .to_string(),
                ));
            }
            let removed = reset(&repo)?;
            println!("Cleared {} mood entries. Settings were kept.", removed);
            Ok(())
        }
        Some(Commands::Reminder) => {
            let repo = FileSystemRepository::discover()?;
            let settings = repo.load_config()?.settings;
            let reminder = next_reminder(&settings, Local::now().naive_local())?;
            print!("{}", format_reminder(reminder.as_ref()));
            Ok(())
        }
        None => {
            println!("moodlog - Daily mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_summary_period(input: &str) -> Result<Period, MoodError> {
    match Period::from_str(input) {
        Ok(Period::Day) | Err(_) => Err(MoodError::InvalidPeriod(input.to_string())),
        Ok(period) => Ok(period),
    }
}
