//! File system repository

use crate::domain::MoodEntry;
use crate::error::{MoodError, Result};
use crate::infrastructure::config::STATE_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENTRIES_FILE: &str = "entries.json";

/// Environment variable that pins the journal root
pub const ROOT_ENV: &str = "MOODLOG_ROOT";

/// Abstract storage for mood journal state
pub trait MoodRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/settings.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/settings.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;

    /// Load every stored entry, in stored order
    fn load_entries(&self) -> Result<Vec<MoodEntry>>;

    /// Replace the stored entry list
    fn save_entries(&self, entries: &[MoodEntry]) -> Result<()>;

    /// Remove all stored entries
    fn clear_entries(&self) -> Result<()>;
}

/// File system implementation of MoodRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodError::Config(format!(
                    "{} is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                tracing::debug!(root = %current.display(), "found journal");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodError::NotMoodlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    fn entries_path(&self) -> PathBuf {
        self.root.join(STATE_DIR).join(ENTRIES_FILE)
    }

    /// Write via a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.moodlog-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(ENTRIES_FILE),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        let written = fs::write(&tmp_path, content).and_then(|()| Self::replace(&tmp_path, path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            tracing::error!(path = %path.display(), error = %e, "failed to write entries");
            return Err(e.into());
        }
        Ok(())
    }

    fn replace(tmp_path: &Path, path: &Path) -> std::io::Result<()> {
        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }
        fs::rename(tmp_path, path)
    }
}

impl MoodRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let state_dir = self.root.join(STATE_DIR);

        if state_dir.exists() {
            return Err(MoodError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<MoodEntry>> {
        let path = self.entries_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "entry store is unreadable");
            MoodError::Json(e)
        })
    }

    fn save_entries(&self, entries: &[MoodEntry]) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        Self::write_atomic(&self.entries_path(), &contents)?;
        tracing::debug!(count = entries.len(), "entries saved");
        Ok(())
    }

    fn clear_entries(&self) -> Result<()> {
        let path = self.entries_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
