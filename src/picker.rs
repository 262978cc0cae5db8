// src/picker.rs
// Success-weighted random card selection. The better a card is known,
// the smaller its chance of coming up again.

use clap::ValueEnum;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;

use crate::card::Card;
use crate::error::{Result, VocabError};

/// Selection policy for a quiz batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every non-archived card can come up.
    Regular,
    /// Cards above the mastery threshold are left out.
    Training,
}

/// Draws card indices for one quiz batch. Weights are computed once at
/// construction and reused for every draw, so statistics mutated during
/// the batch only take effect in the next one.
pub struct CardPicker {
    distribution: WeightedIndex<f64>,
}

impl CardPicker {
    /// Weighs every card in input order and prepares the distribution.
    /// An empty collection and an all-zero weight set (everything
    /// archived or mastered) are reported as distinct errors.
    pub fn new(cards: &[Card], mode: Mode) -> Result<Self> {
        if cards.is_empty() {
            return Err(VocabError::EmptyCollection);
        }

        let max_repeats = cards.iter().map(|c| c.repeats).max().unwrap_or(0);
        let weights: Vec<f64> = cards
            .iter()
            .map(|c| c.weight(max_repeats, mode))
            .collect();
        log::debug!("batch weights: {:?}", weights);

        let distribution = WeightedIndex::new(&weights).map_err(|e| match e {
            WeightedError::AllWeightsZero => VocabError::DegenerateWeights,
            other => VocabError::Draw(other),
        })?;

        Ok(Self { distribution })
    }

    /// One weighted draw over `[0, N)`. Draws are independent; the same
    /// index can repeat within a batch.
    pub fn pick_index(&self, rng: &mut impl Rng) -> usize {
        self.distribution.sample(rng)
    }
}
