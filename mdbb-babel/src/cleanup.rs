//! Post-processing cleanups
//!
//! Fixes artifacts left by rules that ran independently of each other:
//!
//! - adjacent `[quote]` lines are merged into one quote block
//! - headers that wrap nothing (`[size=N][b][/b][/size]`) are dropped
//! - runs of three or more newlines shrink to a single blank line
//! - the document is trimmed
//!
//! Each cleanup can be switched off through [`CleanupRules`]. Code block bodies are shelved while
//! the cleanups run, so blank lines and bracket text inside fenced code come out untouched.

use crate::document::{Document, Fragment};
use crate::protect::Shelf;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static QUOTE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[/quote\]\n\[quote\]").unwrap());
static EMPTY_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[size=\d+\]\[b\]\[/b\]\[/size\]").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Switches for the post-processing cleanups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupRules {
    /// Join `[/quote]` + newline + `[quote]` into one continued quote
    pub merge_adjacent_quotes: bool,

    /// Remove headers with empty content
    pub drop_empty_headers: bool,

    /// Collapse three or more consecutive newlines into two
    pub collapse_blank_lines: bool,

    /// Strip leading and trailing whitespace from the document
    pub trim_document: bool,
}

impl Default for CleanupRules {
    fn default() -> Self {
        Self {
            merge_adjacent_quotes: true,
            drop_empty_headers: true,
            collapse_blank_lines: true,
            trim_document: true,
        }
    }
}

/// Renders `document` and applies the enabled cleanups.
pub fn post_process(document: &Document, rules: &CleanupRules) -> String {
    let mut shelf = Shelf::new();
    let text = document
        .fragments()
        .iter()
        .map(|fragment| match fragment {
            Fragment::Line(line) => shelf.escape(line),
            Fragment::Code(_) => shelf.protect(fragment.render()),
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut text = text;
    if rules.merge_adjacent_quotes {
        text = merge_adjacent_quotes(&text);
    }
    if rules.drop_empty_headers {
        text = drop_empty_headers(&text);
    }
    if rules.collapse_blank_lines {
        text = collapse_blank_lines(&text);
    }

    let text = shelf.restore(&text);
    if rules.trim_document {
        text.trim().to_string()
    } else {
        text
    }
}

pub fn merge_adjacent_quotes(text: &str) -> String {
    QUOTE_BOUNDARY.replace_all(text, "\n").into_owned()
}

pub fn drop_empty_headers(text: &str) -> String {
    EMPTY_HEADER.replace_all(text, "").into_owned()
}

pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}
