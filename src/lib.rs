//! moodlog - Daily mood journal
//!
//! Logs one mood rating per day with an optional note, and summarizes the
//! history by week, month, or year. All state lives in a local `.moodlog`
//! directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodError;
