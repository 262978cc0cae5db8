// src/storage/record.rs
// The JSON form of a card. Timestamps travel as fixed-format strings and
// are parsed strictly when the database is loaded.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{Result, VocabError};

/// Timestamp layout written to the database file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
// Parsing accepts any fraction width (including none) so hand-edited
// files still load.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// One card as stored on disk. The counters and the archive flag default
/// when absent so database files written by older versions keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub repeats: u32,
    #[serde(default)]
    pub correct_repeats: u32,
    #[serde(default)]
    pub last_wrong_answer_time: Option<String>,
    #[serde(default)]
    pub last_appearance_time: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
}

impl CardRecord {
    pub fn from_card(card: &Card) -> Self {
        Self {
            question: card.question.clone(),
            answer: card.answer.clone(),
            repeats: card.repeats,
            correct_repeats: card.correct_repeats,
            last_wrong_answer_time: card.last_wrong_answer_time.map(format_timestamp),
            last_appearance_time: Some(format_timestamp(card.last_appearance_time)),
            creation_time: Some(format_timestamp(card.creation_time)),
            is_archived: card.is_archived,
        }
    }

    /// Builds the in-memory card. Records that predate a timestamp field
    /// get `loaded_at` in its place; a timestamp that is present but
    /// unparsable is fatal.
    pub fn into_card(self, loaded_at: NaiveDateTime) -> Result<Card> {
        let last_wrong_answer_time = match self.last_wrong_answer_time {
            Some(raw) => Some(parse_timestamp(&raw)?),
            None => None,
        };

        Ok(Card {
            question: self.question,
            answer: self.answer,
            repeats: self.repeats,
            correct_repeats: self.correct_repeats,
            last_wrong_answer_time,
            last_appearance_time: parse_or(self.last_appearance_time, loaded_at)?,
            creation_time: parse_or(self.creation_time, loaded_at)?,
            is_archived: self.is_archived,
        })
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_PARSE_FORMAT)
        .map_err(|_| VocabError::MalformedTimestamp(raw.to_string()))
}

fn parse_or(raw: Option<String>, fallback: NaiveDateTime) -> Result<NaiveDateTime> {
    match raw {
        Some(raw) => parse_timestamp(&raw),
        None => Ok(fallback),
    }
}
