//! Ordered-list folding
//!
//! Runs over the already converted document. Consecutive `N. item` lines become one
//! `[list=1]` block of `[*] item` entries; the numbers themselves are dropped, so `5.` and `1.`
//! are treated alike. Code blocks never hold list items and always end a run.

use crate::document::{Document, Fragment};
use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());

pub const LIST_OPEN: &str = "[list=1]";
pub const LIST_CLOSE: &str = "[/list]";

#[derive(Debug, Default)]
struct ListFoldState {
    in_list: bool,
    runs: usize,
}

/// Content of a numbered item line, or `None` if the line is not one.
pub fn ordered_item(line: &str) -> Option<&str> {
    ORDERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|content| content.as_str())
}

pub fn fold_ordered_lists(document: Document) -> Document {
    let mut state = ListFoldState::default();
    let mut folded = Document::new();

    for fragment in document.into_fragments() {
        let item = fragment.as_line().and_then(ordered_item);
        match item {
            Some(content) => {
                if !state.in_list {
                    folded.push(Fragment::line(LIST_OPEN));
                    state.in_list = true;
                    state.runs += 1;
                }
                folded.push(Fragment::line(format!("[*] {content}")));
            }
            None => {
                if state.in_list {
                    folded.push(Fragment::line(LIST_CLOSE));
                    state.in_list = false;
                }
                folded.push(fragment);
            }
        }
    }

    if state.in_list {
        folded.push(Fragment::line(LIST_CLOSE));
    }
    tracing::debug!(runs = state.runs, "folded ordered lists");
    folded
}
