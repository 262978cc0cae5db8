// src/card.rs
// The flashcard state model: content, exposure statistics and the
// interactive answer flow.

use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::output::Output;
use crate::picker::Mode;
use crate::prompt::Prompt;
use crate::text;

/// Fraction of answer characters hidden by a hint.
const HINT_RATIO: f64 = 0.5;
/// Success percentage above which training mode stops drawing a card.
const MASTERY_THRESHOLD: f64 = 80.0;
/// Token the user types to request a hint instead of an answer.
const HINT_TOKEN: &str = "?";

/// One flashcard. Content is immutable after creation; the counters and
/// timestamps are only ever touched by `perform_answer` and the
/// archive toggle. Invariant: `correct_repeats <= repeats`.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub question: String,
    pub answer: String,
    pub repeats: u32,
    pub correct_repeats: u32,
    pub last_wrong_answer_time: Option<NaiveDateTime>,
    pub last_appearance_time: NaiveDateTime,
    pub creation_time: NaiveDateTime,
    pub is_archived: bool,
}

impl Card {
    /// A fresh card with zeroed statistics.
    pub fn new(question: String, answer: String, now: NaiveDateTime) -> Self {
        Self {
            question,
            answer,
            repeats: 0,
            correct_repeats: 0,
            last_wrong_answer_time: None,
            last_appearance_time: now,
            creation_time: now,
            is_archived: false,
        }
    }

    /// Question text ready for the terminal. `truncate` caps it for the
    /// stats table.
    pub fn display_question(&self, truncate: bool) -> String {
        let text = text::display(&self.question);
        if truncate {
            text.chars().take(text::TABLE_TEXT_LIMIT).collect()
        } else {
            text
        }
    }

    pub fn display_answer(&self) -> String {
        text::display(&self.answer)
    }

    /// Share of presentations answered correctly without a hint, rounded
    /// to two decimals. A card that was never shown scores 0.
    pub fn success_percent(&self) -> f64 {
        if self.repeats == 0 {
            return 0.0;
        }
        let percent = f64::from(self.correct_repeats) / f64::from(self.repeats) * 100.0;
        (percent * 100.0).round() / 100.0
    }

    /// True while the last wrong answer is less than a week old.
    pub fn was_answered_wrong_lately(&self, now: NaiveDateTime) -> bool {
        match self.last_wrong_answer_time {
            Some(at) => now < at + Duration::weeks(1),
            None => false,
        }
    }

    /// The answer with half of its characters (rounded up) masked out at
    /// random positions, or `None` when there is nothing to mask.
    pub fn hint(&self, rng: &mut impl Rng) -> Option<String> {
        let mut chars: Vec<char> = self.answer.chars().collect();
        if chars.is_empty() {
            return None;
        }
        let masked = (chars.len() as f64 * HINT_RATIO).ceil() as usize;
        let mut positions: Vec<usize> = (0..chars.len()).collect();
        positions.shuffle(rng);
        positions.truncate(masked);
        for position in positions {
            chars[position] = '_';
        }
        Some(chars.into_iter().collect())
    }

    /// Runs one interactive round for this card and returns whether the
    /// final response matched the answer. Statistics update in place; a
    /// hint-assisted match does not count toward `correct_repeats`.
    pub fn perform_answer(
        &mut self,
        io: &mut dyn Prompt,
        out: &Output,
        rng: &mut impl Rng,
        now: NaiveDateTime,
    ) -> Result<bool> {
        self.repeats += 1;
        self.last_appearance_time = now;
        let mut hint_used = false;

        out.question(&format!("Card: {}", self.display_question(false)));
        let mut response = normalize(&io.line("Answer [? for hint]: ")?);

        if response == HINT_TOKEN {
            if let Some(hint) = self.hint(rng) {
                out.warning(&format!("Hint: {}", hint));
                hint_used = true;
            }
            response = normalize(&io.line("Answer: ")?);
        }

        if response == normalize(&self.answer) {
            out.success("You're correct!");
            if hint_used {
                out.warning("You used a hint, so this won't count as a correct answer!");
            } else {
                self.correct_repeats += 1;
            }
            return Ok(true);
        }

        self.last_wrong_answer_time = Some(now);
        out.error(&format!(
            "You're wrong! :(\nReal answer: {}",
            self.display_answer()
        ));
        Ok(false)
    }

    /// Relative selection weight for the picker. Archived cards never
    /// draw; training mode also retires cards above the mastery
    /// threshold. `max_repeats` is the highest exposure count in the
    /// whole collection, so a zero means nothing was ever drilled and
    /// every card keeps maximal priority.
    pub fn weight(&self, max_repeats: u32, mode: Mode) -> f64 {
        if self.is_archived {
            return 0.0;
        }
        match mode {
            Mode::Training if self.success_percent() > MASTERY_THRESHOLD => 0.0,
            Mode::Regular | Mode::Training => {
                if max_repeats == 0 {
                    100.0
                } else {
                    100.0
                        - self.success_percent()
                            * (f64::from(self.repeats) / f64::from(max_repeats))
                }
            }
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn card_with_stats(repeats: u32, correct_repeats: u32) -> Card {
        let mut card = Card::new("capital of France".to_string(), "Paris".to_string(), noon());
        card.repeats = repeats;
        card.correct_repeats = correct_repeats;
        card
    }

    fn quiet() -> Output {
        Output::new(false)
    }

    #[test]
    fn test_success_percent_never_shown() {
        assert_eq!(card_with_stats(0, 0).success_percent(), 0.0);
    }

    #[test]
    fn test_success_percent_rounds_to_two_decimals() {
        assert_eq!(card_with_stats(3, 1).success_percent(), 33.33);
        assert_eq!(card_with_stats(10, 10).success_percent(), 100.0);
    }

    #[test]
    fn test_hint_masks_half_the_characters() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        card.answer = "abcdef".to_string();

        let hint = card.hint(&mut rng).unwrap();
        let original: Vec<char> = card.answer.chars().collect();

        assert_eq!(hint.chars().count(), 6);
        assert_eq!(hint.chars().filter(|&c| c == '_').count(), 3);
        for (i, c) in hint.chars().enumerate() {
            if c != '_' {
                assert_eq!(c, original[i]);
            }
        }
    }

    #[test]
    fn test_hint_rounds_mask_count_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        card.answer = "abcde".to_string();

        let hint = card.hint(&mut rng).unwrap();
        assert_eq!(hint.chars().filter(|&c| c == '_').count(), 3);
    }

    #[test]
    fn test_hint_empty_answer_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        card.answer = String::new();
        assert!(card.hint(&mut rng).is_none());
    }

    #[test]
    fn test_weight_archived_is_zero_in_both_modes() {
        let mut card = card_with_stats(1, 0);
        card.is_archived = true;
        assert_eq!(card.weight(10, Mode::Regular), 0.0);
        assert_eq!(card.weight(10, Mode::Training), 0.0);
    }

    #[test]
    fn test_weight_training_retires_mastered_cards() {
        // 17/20 = 85% success: above the threshold.
        let mastered = card_with_stats(20, 17);
        assert_eq!(mastered.weight(20, Mode::Training), 0.0);
        assert!(mastered.weight(20, Mode::Regular) > 0.0);

        // 15/20 = 75% success: still drilled in training mode.
        let in_progress = card_with_stats(20, 15);
        assert_eq!(in_progress.weight(20, Mode::Training), 25.0);
    }

    #[test]
    fn test_weight_never_attempted_card_has_maximal_priority() {
        let card = card_with_stats(0, 0);
        assert_eq!(card.weight(10, Mode::Regular), 100.0);
        assert_eq!(card.weight(10, Mode::Training), 100.0);
    }

    #[test]
    fn test_weight_handles_never_attempted_collection() {
        let card = card_with_stats(0, 0);
        assert_eq!(card.weight(0, Mode::Regular), 100.0);
    }

    #[test]
    fn test_weight_fully_drilled_perfect_card_is_zero() {
        let card = card_with_stats(10, 10);
        assert_eq!(card.weight(10, Mode::Regular), 0.0);
    }

    #[test]
    fn test_answer_correct_increments_both_counters() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        let mut io = ScriptedPrompt::new(&["  PARIS "]);

        let correct = card
            .perform_answer(&mut io, &quiet(), &mut rng, noon())
            .unwrap();

        assert!(correct);
        assert_eq!(card.repeats, 1);
        assert_eq!(card.correct_repeats, 1);
        assert!(card.last_wrong_answer_time.is_none());
        assert_eq!(card.last_appearance_time, noon());
    }

    #[test]
    fn test_answer_wrong_records_failure_time() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        let mut io = ScriptedPrompt::new(&["London"]);

        let correct = card
            .perform_answer(&mut io, &quiet(), &mut rng, noon())
            .unwrap();

        assert!(!correct);
        assert_eq!(card.repeats, 1);
        assert_eq!(card.correct_repeats, 0);
        assert_eq!(card.last_wrong_answer_time, Some(noon()));
    }

    #[test]
    fn test_answer_with_hint_does_not_count_as_correct() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        let mut io = ScriptedPrompt::new(&["?", "paris"]);

        let correct = card
            .perform_answer(&mut io, &quiet(), &mut rng, noon())
            .unwrap();

        assert!(correct);
        assert_eq!(card.repeats, 1);
        assert_eq!(card.correct_repeats, 0);
    }

    #[test]
    fn test_answer_empty_input_is_reprompted() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        let mut io = ScriptedPrompt::new(&["", "   ", "paris"]);

        let correct = card
            .perform_answer(&mut io, &quiet(), &mut rng, noon())
            .unwrap();

        assert!(correct);
        assert_eq!(card.correct_repeats, 1);
    }

    #[test]
    fn test_counters_stay_consistent_over_a_sequence() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut card = card_with_stats(0, 0);
        let answers = ["paris", "london", "?", "paris", "paris", "rome"];

        for answer in answers {
            let mut io = ScriptedPrompt::new(&[answer, "paris"]);
            card.perform_answer(&mut io, &quiet(), &mut rng, noon())
                .unwrap();
        }

        assert_eq!(card.repeats, 6);
        // Three plain correct answers; the hinted one does not count.
        assert_eq!(card.correct_repeats, 3);
        assert!(card.correct_repeats <= card.repeats);
    }

    #[test]
    fn test_was_answered_wrong_lately_window() {
        let mut card = card_with_stats(1, 0);
        card.last_wrong_answer_time = Some(noon());

        assert!(card.was_answered_wrong_lately(noon() + Duration::days(6)));
        assert!(!card.was_answered_wrong_lately(noon() + Duration::days(8)));
        assert!(!card_with_stats(0, 0).was_answered_wrong_lately(noon()));
    }
}
