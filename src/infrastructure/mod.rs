//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, MoodRepository};
