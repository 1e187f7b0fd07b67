//! Removal of layout artifacts from raw book text.

use regex::Regex;
use std::sync::OnceLock;

/// Lines this short (after trimming) are treated as artifacts.
const MIN_LINE_CHARS: usize = 3;

static PAGE_NUMBER: OnceLock<Regex> = OnceLock::new();

fn page_number_pattern() -> &'static Regex {
    PAGE_NUMBER.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*\d+[ \t]*$").expect("page number pattern should compile")
    })
}

/// Clean raw text starting at `offset`.
///
/// Steps, in order:
/// - Drops everything before `offset` (skipped when `offset` is 0)
/// - Blanks lines holding only a page number
/// - Drops artifact lines and back-to-back repeats of the same line
/// - Collapses newline and space runs, then trims the result
pub fn normalize(text: &str, offset: usize) -> String {
    let text = if offset > 0 { &text[offset..] } else { text };

    let text = page_number_pattern().replace_all(text, "");
    let text = drop_repeated_lines(&text);
    let text = collapse_whitespace(&text);

    text.trim().to_string()
}

/// Keep lines that are long enough and differ from the last kept line.
///
/// Only adjacent repeats are dropped: a running header separated by body
/// text survives every time it appears.
fn drop_repeated_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut last_kept = "";

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.chars().count() < MIN_LINE_CHARS || trimmed == last_kept {
            continue;
        }
        kept.push(line);
        last_kept = trimmed;
    }

    kept.join("\n")
}

/// Collapse 3+ newlines to two and runs of spaces to one.
fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;
    let mut newline_count = 0;

    for c in text.chars() {
        if c == '\n' {
            newline_count += 1;
            prev_was_space = false;

            if newline_count <= 2 {
                result.push('\n');
            }
        } else if c == ' ' {
            newline_count = 0;
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            newline_count = 0;
            prev_was_space = false;
            result.push(c);
        }
    }

    result
}
