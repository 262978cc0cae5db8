// src/storage/history.rs
// Append-only plain-text log of quiz answers, one line per answered
// card. The database file only keeps aggregates; this keeps the trail.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::card::Card;
use crate::error::Result;
use crate::storage::record::format_timestamp;

pub struct HistoryLogger {
    log_path: PathBuf,
}

impl HistoryLogger {
    pub fn new(directory: &Path) -> Result<Self> {
        fs::create_dir_all(directory)?;
        Ok(Self {
            log_path: directory.join("answers.log"),
        })
    }

    /// Appends one answer outcome.
    /// Format: timestamp,question,correct,repeats,correct_repeats
    pub fn log_answer(&self, card: &Card, correct: bool, at: NaiveDateTime) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let line = format!(
            "{},{},{},{},{}\n",
            format_timestamp(at),
            card.question,
            correct,
            card.repeats,
            card.correct_repeats
        );
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
