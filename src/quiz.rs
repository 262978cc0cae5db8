// src/quiz.rs
// The answer flow: one picker per batch, one interactive round per draw.

use chrono::Local;
use rand::Rng;

use crate::card::Card;
use crate::error::Result;
use crate::output::Output;
use crate::picker::{CardPicker, Mode};
use crate::prompt::Prompt;
use crate::storage::HistoryLogger;

/// Outcome of one quiz batch.
pub struct BatchSummary {
    pub answered: usize,
    pub correct: usize,
}

/// Runs `amount` rounds over `cards`, mutating them in place. The picker
/// is built once up front, so weights stay fixed for the whole batch
/// even as answers land; the same card may come up more than once.
pub fn run_batch(
    cards: &mut [Card],
    amount: usize,
    mode: Mode,
    io: &mut dyn Prompt,
    out: &Output,
    rng: &mut impl Rng,
    history: Option<&HistoryLogger>,
) -> Result<BatchSummary> {
    let picker = CardPicker::new(cards, mode)?;
    let mut summary = BatchSummary {
        answered: 0,
        correct: 0,
    };

    for _ in 0..amount {
        let index = picker.pick_index(rng);
        let now = Local::now().naive_local();
        let card = &mut cards[index];
        let correct = card.perform_answer(io, out, rng, now)?;

        summary.answered += 1;
        if correct {
            summary.correct += 1;
        }
        if let Some(history) = history {
            if let Err(e) = history.log_answer(card, correct, now) {
                log::warn!("failed to append answer history: {}", e);
            }
        }
    }

    Ok(summary)
}
