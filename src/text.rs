// src/text.rs
// Display fixes for right-to-left text. Most terminals lay Hebrew out
// left-to-right, so stored RTL strings are reversed before printing.

/// Characters the stats table shows before cutting a question off.
pub const TABLE_TEXT_LIMIT: usize = 20;

fn is_hebrew(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| matches!(c, '\u{0590}'..='\u{05FE}' | ' '))
}

/// Returns `text` as it should be printed: character-reversed when the
/// whole string is Hebrew, unchanged otherwise.
pub fn display(text: &str) -> String {
    if is_hebrew(text) {
        text.chars().rev().collect()
    } else {
        text.to_string()
    }
}
