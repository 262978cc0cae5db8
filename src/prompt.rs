// src/prompt.rs
// Line-oriented user input. Every method loops until the user supplies
// something usable, so callers never see empty or out-of-range text.

use std::io::{self, BufRead, Write};

/// Input seam for the interactive flows. The trainer only ever needs a
/// non-empty line or a pick from a fixed option set, and swapping the
/// implementation out keeps the answer flow testable without a terminal.
pub trait Prompt {
    /// Asks until a non-empty (after trimming) line is entered.
    fn line(&mut self, prompt: &str) -> io::Result<String>;

    /// Asks until the entered line is one of `options`.
    fn choice(&mut self, prompt: &str, options: &[String]) -> io::Result<String> {
        loop {
            let answer = self.line(prompt)?;
            if options.iter().any(|o| o == &answer) {
                return Ok(answer);
            }
        }
    }
}

/// Reads from stdin, writing prompts to stdout.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn line(&mut self, prompt: &str) -> io::Result<String> {
        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            print!("{}", prompt);
            io::stdout().flush()?;
            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
            }
            let trimmed = input.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }
}

/// Replays a fixed script of responses. Empty entries exercise the
/// re-prompt loop the same way an accidental bare Enter would.
#[cfg(test)]
pub struct ScriptedPrompt {
    responses: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn line(&mut self, _prompt: &str) -> io::Result<String> {
        loop {
            let next = self
                .responses
                .pop_front()
                .expect("scripted prompt ran out of responses");
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_skips_empty_lines() {
        let mut prompt = ScriptedPrompt::new(&["", "  ", "hello"]);
        assert_eq!(prompt.line("? ").unwrap(), "hello");
    }

    #[test]
    fn test_choice_rejects_until_valid() {
        let mut prompt = ScriptedPrompt::new(&["maybe", "x", "y"]);
        let options = vec!["y".to_string(), "n".to_string()];
        assert_eq!(prompt.choice("? ", &options).unwrap(), "y");
    }
}
