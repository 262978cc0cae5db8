// src/storage/db.rs
// JSON-file persistence for the card collection. The whole file is read
// once at startup and rewritten after a batch or a structural change;
// there is exactly one reader and one writer per run, last write wins.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::card::Card;
use crate::error::Result;
use crate::storage::record::CardRecord;

pub struct JsonDb {
    path: PathBuf,
}

impl JsonDb {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads every card, in file order. A missing file is an empty
    /// collection, not an error.
    pub fn load(&self, loaded_at: NaiveDateTime) -> Result<Vec<Card>> {
        if !self.path.exists() {
            log::info!(
                "card database {} not found, starting empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let records: Vec<CardRecord> = serde_json::from_str(&content)?;
        let cards = records
            .into_iter()
            .map(|record| record.into_card(loaded_at))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("loaded {} cards from {}", cards.len(), self.path.display());
        Ok(cards)
    }

    /// Rewrites the whole collection.
    pub fn save(&self, cards: &[Card]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let records: Vec<CardRecord> = cards.iter().map(CardRecord::from_card).collect();
        fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;

        log::debug!("saved {} cards to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabError;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db = JsonDb::new(dir.path().join("db.json"));
        assert!(db.load(noon()).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let db = JsonDb::new(dir.path().join("db.json"));

        let mut card = Card::new("q".to_string(), "a".to_string(), noon());
        card.repeats = 3;
        card.correct_repeats = 2;
        let cards = vec![card, Card::new("q2".to_string(), "a2".to_string(), noon())];

        db.save(&cards).unwrap();
        let loaded = db.load(noon()).unwrap();

        assert_eq!(loaded, cards);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let db = JsonDb::new(dir.path().join("nested").join("db.json"));
        db.save(&[Card::new("q".to_string(), "a".to_string(), noon())])
            .unwrap();
        assert_eq!(db.load(noon()).unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_timestamp_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"[{"question": "q", "answer": "a", "creation_time": "not a time"}]"#,
        )
        .unwrap();

        let result = JsonDb::new(path).load(noon());
        assert!(matches!(result, Err(VocabError::MalformedTimestamp(_))));
    }

    #[test]
    fn test_invalid_json_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{{not json").unwrap();

        let result = JsonDb::new(path).load(noon());
        assert!(matches!(result, Err(VocabError::Json(_))));
    }
}
