//! Line classifier
//!
//! Whole-line, anchored rules: each one only fires when its pattern spans the entire line.
//!
//! | Markdown line        | BBCode                        |
//! |----------------------|-------------------------------|
//! | `# Title` .. `######` | `[size=6][b]Title[/b][/size]` .. `[size=1]` |
//! | `* item`, `- item`, `+ item` | `[*] item`            |
//! | `> quoted`           | `[quote]quoted[/quote]`       |
//! | `---`, `***`, `___`  | `[hr]`                        |
//!
//! Headers run first in the per-line cascade, the other three after links and before emphasis.
//! See [`crate::pipeline`] for the exact order.

use crate::protect::Shelf;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6}) (.+)$").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[*+-] (.+)$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> (.+)$").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap());

/// BBCode size for a header level; level 1 is the largest.
pub fn header_size(level: usize) -> usize {
    7 - level.clamp(1, 6)
}

/// `#`..`######` followed by a space and content.
///
/// A marker with nothing after the space is left alone, as are seven or more markers.
pub fn header(line: &str) -> String {
    HEADER
        .replace(line, |caps: &Captures| {
            let size = header_size(caps[1].len());
            format!("[size={size}][b]{}[/b][/size]", &caps[2])
        })
        .into_owned()
}

/// `*`, `-` or `+` followed by a space and content.
///
/// The `[*]` marker goes on the shelf so the emphasis cascade cannot pair its asterisk with one
/// further along the line.
pub fn unordered_item(line: &str, shelf: &mut Shelf) -> String {
    UNORDERED_ITEM
        .replace(line, |caps: &Captures| {
            format!("{} {}", shelf.protect("[*]"), &caps[1])
        })
        .into_owned()
}

/// A single `> ` quote line. Runs of quote lines are merged later by the cleanup pass.
pub fn quote(line: &str) -> String {
    QUOTE.replace(line, "[quote]$1[/quote]").into_owned()
}

pub fn horizontal_rule(line: &str) -> String {
    HORIZONTAL_RULE.replace(line, "[hr]").into_owned()
}
