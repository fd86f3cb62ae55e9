//! Placeholder shelf for markup that later rules must not see
//!
//!     Rules run as plain text substitutions, so a rule that fires late in the cascade would
//!     happily rewrite markup produced by an earlier one: the body of a code span would pick up
//!     emphasis, an underscore in a link target would turn into italics. Instead of teaching every
//!     rule about every other rule, producers put finished markup on a [`Shelf`] and leave an
//!     opaque placeholder in the text. Once the cascade is done the shelf puts everything back.
//!
//!     Placeholders are `U+E000 <index> U+E001`. Both delimiters live in the Unicode private use
//!     area and contain none of the characters any rule matches on. Source text that already
//!     contains `U+E000` is escaped on entry so it can never be mistaken for a placeholder.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new("\u{E000}([0-9]+)\u{E001}").unwrap());

/// Storage for protected segments of a single piece of text.
#[derive(Debug, Default)]
pub struct Shelf {
    slots: Vec<String>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shelf for `text` and returns the escaped text to run rules on.
    pub fn open(text: &str) -> (Self, String) {
        let mut shelf = Self::new();
        let escaped = shelf.escape(text);
        (shelf, escaped)
    }

    /// Shelves every literal placeholder opener found in `text`.
    pub fn escape(&mut self, text: &str) -> String {
        if !text.contains(OPEN) {
            return text.to_string();
        }
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch == OPEN {
                escaped.push_str(&self.protect(OPEN.to_string()));
            } else {
                escaped.push(ch);
            }
        }
        escaped
    }

    /// Stores `markup` and returns the placeholder standing in for it.
    pub fn protect(&mut self, markup: impl Into<String>) -> String {
        self.slots.push(markup.into());
        format!("{OPEN}{}{CLOSE}", self.slots.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Replaces every placeholder in `text` with the markup it stands for.
    pub fn restore(&self, text: &str) -> String {
        self.expand(text, self.slots.len())
    }

    // A slot may embed placeholders created before it (a link target holding a code span), so
    // expansion recurses, but only into lower indices. That bounds the recursion.
    fn expand(&self, text: &str, limit: usize) -> String {
        if !text.contains(OPEN) {
            return text.to_string();
        }
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                match caps[1].parse::<usize>() {
                    Ok(index) if index < limit => self.expand(&self.slots[index], index),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
