// src/output.rs
// Terminal presentation. One Output is built in main and handed to
// whatever needs to talk to the user; log::* stays for diagnostics.

use owo_colors::OwoColorize;

/// User-facing terminal output. Coloring is decided once at startup so
/// piped output stays clean.
pub struct Output {
    colored: bool,
}

impl Output {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// The card text shown before asking for an answer.
    pub fn question(&self, message: &str) {
        if self.colored {
            println!("{}", message.bold());
        } else {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if self.colored {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("{}", message.yellow());
        } else {
            println!("{}", message);
        }
    }

    pub fn info(&self, message: &str) {
        println!("{}", message);
    }
}
