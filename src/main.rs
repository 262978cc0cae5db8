// src/main.rs
// Command-line entry point: argument parsing and dispatch to the flows.

use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::{Parser, Subcommand};

mod bank;
mod card;
mod config;
mod error;
mod output;
mod picker;
mod prompt;
mod quiz;
mod stats;
mod storage;
mod text;

use card::Card;
use config::Config;
use error::{Result, VocabError};
use output::Output;
use picker::Mode;
use prompt::{Prompt, StdinPrompt};
use storage::{HistoryLogger, JsonDb};

#[derive(Parser)]
#[command(name = "vocab", version)]
#[command(about = "A success-weighted vocabulary flashcard trainer")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Card database file (default: ~/.vocab/db.json)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Quiz yourself on a batch of cards
    Answer {
        /// How many cards to draw
        #[arg(long, default_value_t = 1)]
        amount: usize,

        /// Selection policy
        #[arg(long, value_enum, default_value = "regular")]
        mode: Mode,
    },
    /// Add a single card
    Add,
    /// Import a ready-made topic from the online bank
    AddTopic,
    /// Remove a card by its stats-table ID
    Remove { index: usize },
    /// Exclude a card from future draws
    Archive { index: usize },
    /// Bring an archived card back into the draw
    Unarchive { index: usize },
    /// Show the per-card statistics table
    Stats {
        /// Show untruncated question text
        #[arg(long)]
        full: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::new(cli.db.clone());
    let out = Output::new(!cli.no_color);

    if let Err(e) = run(cli, &config, &out) {
        out.error(&e.to_string());
        process::exit(1);
    }
}

fn run(cli: Cli, config: &Config, out: &Output) -> Result<()> {
    let db = JsonDb::new(config.db_path.clone());
    let mut cards = db.load(Local::now().naive_local())?;
    let mut io = StdinPrompt;

    match cli.command {
        Command::Answer { amount, mode } => {
            let history = HistoryLogger::new(&config.history_dir)?;
            let mut rng = rand::thread_rng();
            let summary = quiz::run_batch(
                &mut cards,
                amount,
                mode,
                &mut io,
                out,
                &mut rng,
                Some(&history),
            )?;
            db.save(&cards)?;
            out.info(&format!(
                "Batch done: {}/{} correct",
                summary.correct, summary.answered
            ));
        }
        Command::Add => {
            let question = io.line("Enter question: ")?;
            let answer = io.line("Enter answer: ")?;
            cards.push(Card::new(question, answer, Local::now().naive_local()));
            db.save(&cards)?;
            out.success("Card added successfully!");
        }
        Command::AddTopic => add_topic(&mut cards, &db, config, &mut io, out)?,
        Command::Remove { index } => {
            check_index(index, cards.len())?;
            let removed = cards.remove(index);
            db.save(&cards)?;
            out.success(&format!(
                "Removed card: {}",
                removed.display_question(false)
            ));
        }
        Command::Archive { index } => {
            check_index(index, cards.len())?;
            cards[index].is_archived = true;
            db.save(&cards)?;
            out.success("Card archived");
        }
        Command::Unarchive { index } => {
            check_index(index, cards.len())?;
            cards[index].is_archived = false;
            db.save(&cards)?;
            out.success("Card unarchived");
        }
        Command::Stats { full } => {
            stats::print_stats(&cards, full, out, Local::now().naive_local());
        }
    }

    Ok(())
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(VocabError::InvalidIndex { index, len });
    }
    Ok(())
}

/// Interactive topic import: list the bank's topics, preview the chosen
/// one, and append its pairs as fresh cards on approval.
fn add_topic(
    cards: &mut Vec<Card>,
    db: &JsonDb,
    config: &Config,
    io: &mut dyn Prompt,
    out: &Output,
) -> Result<()> {
    let bank = bank::Bank::download(&config.bank_url)?;
    let names = bank.topic_names();
    if names.is_empty() {
        out.warning("The bank has no topics right now");
        return Ok(());
    }

    out.info("Available topics:");
    for (i, name) in names.iter().enumerate() {
        out.info(&format!("[{}] {}", i + 1, text::display(name)));
    }

    let options: Vec<String> = (1..=names.len()).map(|n| n.to_string()).collect();
    let selection = io.choice("Select topic number: ", &options)?;
    let position = options
        .iter()
        .position(|o| *o == selection)
        .ok_or_else(|| VocabError::UnknownTopic(selection.clone()))?;
    let words = bank.words(names[position])?;

    out.info("Words in this topic:");
    for (question, answer) in words {
        out.info(&format!("{} => {}", text::display(question), answer));
    }

    let yes_no = vec!["y".to_string(), "n".to_string()];
    if io.choice("Add these words to your collection? [y/n] ", &yes_no)? == "n" {
        out.info("Topic skipped");
        return Ok(());
    }

    let now = Local::now().naive_local();
    for (question, answer) in words {
        cards.push(Card::new(question.clone(), answer.clone(), now));
    }
    db.save(cards)?;
    out.success(&format!("Added {} cards from the topic", words.len()));
    Ok(())
}
