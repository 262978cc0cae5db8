// src/stats.rs
// The per-card statistics table and the summary lines printed under it.

use chrono::NaiveDateTime;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};

use crate::card::Card;
use crate::output::Output;

/// Success percentage at which a card counts as in good shape.
const SUCCESS_RATE: f64 = 80.0;

pub fn print_stats(cards: &[Card], full_text: bool, out: &Output, now: NaiveDateTime) {
    if cards.is_empty() {
        out.warning("The card database is empty!");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "ID",
        "Question",
        "Answer",
        "Tries",
        "Correct",
        "Percent",
        "Lately OK",
        "Last answered",
        "Archived",
    ]);

    for (index, card) in cards.iter().enumerate() {
        let lately_ok = !card.was_answered_wrong_lately(now);
        table.add_row(vec![
            Cell::new(index),
            Cell::new(card.display_question(!full_text)),
            Cell::new(card.display_answer()),
            Cell::new(card.repeats),
            Cell::new(card.correct_repeats),
            status_cell(
                format!("{}%", card.success_percent()),
                card.success_percent() > SUCCESS_RATE,
                out.is_colored(),
            ),
            status_cell(lately_ok.to_string(), lately_ok, out.is_colored()),
            Cell::new(card.last_appearance_time.format("%Y-%m-%d")),
            Cell::new(if card.is_archived { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
    println!();
    print_success_rate(cards, out);
    print_learning_metrics(cards, out, now);
}

fn status_cell(text: String, good: bool, colored: bool) -> Cell {
    let cell = Cell::new(text);
    if !colored {
        return cell;
    }
    if good {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

fn print_success_rate(cards: &[Card], out: &Output) {
    let total: u32 = cards.iter().map(|c| c.repeats).sum();
    let correct: u32 = cards.iter().map(|c| c.correct_repeats).sum();
    let rate = if total == 0 {
        0.0
    } else {
        (f64::from(correct) / f64::from(total) * 10_000.0).round() / 100.0
    };
    out.info(&format!(
        "- Total: {}/{} (success rate: {}%)",
        correct, total, rate
    ));
}

fn print_learning_metrics(cards: &[Card], out: &Output, now: NaiveDateTime) {
    let first_creation = match cards.iter().map(|c| c.creation_time).min() {
        Some(at) => at,
        None => return,
    };
    let days = (now - first_creation).num_days().max(0);
    // Anything under a week counts as one, so fresh databases don't
    // report absurd per-week rates.
    let weeks = if days < 7 { 1.0 } else { days as f64 / 7.0 };
    let per_week = cards.len() as f64 / weeks;
    out.info(&format!(
        "- You've been learning for {:.1} weeks, about {:.1} new cards per week",
        weeks, per_week
    ));
}
