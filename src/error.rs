// src/error.rs
// Error kinds surfaced by the trainer. Input validation never lands here
// (prompts loop until valid); everything below aborts the current action.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("the card database is empty, nothing to quiz")]
    EmptyCollection,

    #[error("every remaining card is archived or mastered, nothing left to draw")]
    DegenerateWeights,

    #[error("no card at index {index} (database holds {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("malformed timestamp `{0}` in card database")]
    MalformedTimestamp(String),

    #[error("unrecognized topic `{0}`")]
    UnknownTopic(String),

    #[error("weighted draw failed: {0}")]
    Draw(#[from] rand::distributions::WeightedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("card database is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bank request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, VocabError>;
