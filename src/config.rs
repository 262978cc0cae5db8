// src/config.rs
// Runtime paths and endpoints, resolved once at startup.

use std::path::PathBuf;

/// Published bank of ready-made topics.
const BANK_URL: &str =
    "https://raw.githubusercontent.com/prussyuval/vocabulary/main/vocabulary/bank.json";

pub struct Config {
    pub db_path: PathBuf,
    pub history_dir: PathBuf,
    pub bank_url: String,
}

impl Config {
    /// Default layout: everything under `~/.vocab`. The database path
    /// can be overridden from the command line.
    pub fn new(db_override: Option<PathBuf>) -> Self {
        let base = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vocab");

        Self {
            db_path: db_override.unwrap_or_else(|| base.join("db.json")),
            history_dir: base.join("history"),
            bank_url: BANK_URL.to_string(),
        }
    }
}
