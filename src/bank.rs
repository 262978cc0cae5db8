// src/bank.rs
// Download of the published topic bank: named sets of ready-made
// question/answer pairs that can be imported in one go.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, VocabError};

#[derive(Debug, Deserialize)]
pub struct Topic {
    pub topic: String,
    pub words: BTreeMap<String, String>,
}

pub struct Bank {
    topics: Vec<Topic>,
}

impl Bank {
    /// Fetches the whole bank. Non-2xx responses are errors.
    pub fn download(url: &str) -> Result<Self> {
        log::info!("fetching topic bank from {}", url);
        let topics: Vec<Topic> = reqwest::blocking::get(url)?.error_for_status()?.json()?;
        log::debug!("bank holds {} topics", topics.len());
        Ok(Self { topics })
    }

    pub fn topic_names(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.topic.as_str()).collect()
    }

    pub fn words(&self, topic_name: &str) -> Result<&BTreeMap<String, String>> {
        self.topics
            .iter()
            .find(|t| t.topic == topic_name)
            .map(|t| &t.words)
            .ok_or_else(|| VocabError::UnknownTopic(topic_name.to_string()))
    }
}
