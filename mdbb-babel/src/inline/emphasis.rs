//! Emphasis cascade
//!
//! Four passes, strictly in this order, each a leftmost, non-greedy, non-overlapping replace:
//!
//! 1. `***x***`, `___x___` → `[b][i]x[/i][/b]`
//! 2. `**x**`, `__x__` → `[b]x[/b]`
//! 3. `*x*`, `_x_` → `[i]x[/i]`
//! 4. `~~x~~` → `[s]x[/s]`
//!
//! Once a pass has rewritten a span its markers are gone, so a later pass cannot wrap it again.
//! What is left for the italic pass are stray doubled markers (`**` without a partner); those
//! are skipped by the adjacency rule in [`italic_with`].

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_ITALIC_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_ITALIC_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"___(.+?)___").unwrap());
static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());

/// Runs the whole cascade over one line.
pub fn emphasis(line: &str) -> String {
    strikethrough(&italic(&bold(&bold_italic(line))))
}

pub fn bold_italic(line: &str) -> String {
    let line = BOLD_ITALIC_STARS.replace_all(line, "[b][i]${1}[/i][/b]");
    BOLD_ITALIC_UNDERSCORES
        .replace_all(&line, "[b][i]${1}[/i][/b]")
        .into_owned()
}

pub fn bold(line: &str) -> String {
    let line = BOLD_STARS.replace_all(line, "[b]${1}[/b]");
    BOLD_UNDERSCORES.replace_all(&line, "[b]${1}[/b]").into_owned()
}

pub fn italic(line: &str) -> String {
    italic_with(&italic_with(line, b'*'), b'_')
}

pub fn strikethrough(line: &str) -> String {
    STRIKETHROUGH.replace_all(line, "[s]${1}[/s]").into_owned()
}

/// Wraps `marker`-delimited spans in `[i]`.
///
/// A span opens on a marker whose predecessor is not a marker, runs to the next marker, must
/// hold at least one byte, and its closing marker must not be followed by another marker.
/// Openers that fail any of these are passed over and scanning resumes one byte later.
///
/// Markers are ASCII, so scanning bytes never splits a multi-byte character.
fn italic_with(line: &str, marker: u8) -> String {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == marker && (pos == 0 || bytes[pos - 1] != marker) {
            let close = bytes[pos + 1..]
                .iter()
                .position(|&b| b == marker)
                .map(|offset| pos + 1 + offset);
            if let Some(close) = close {
                let doubled = bytes.get(close + 1) == Some(&marker);
                if close > pos + 1 && !doubled {
                    out.push_str(&line[copied..pos]);
                    out.push_str("[i]");
                    out.push_str(&line[pos + 1..close]);
                    out.push_str("[/i]");
                    copied = close + 1;
                    pos = close + 1;
                    continue;
                }
            }
        }
        pos += 1;
    }

    out.push_str(&line[copied..]);
    out
}
