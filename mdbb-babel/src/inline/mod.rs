//! Inline rule engine
//!
//!     Rules that apply anywhere in a line, as often as they match:
//!
//!     - code spans: `` `text` `` → `[code]text[/code]`
//!     - images: `![alt](url)` → `[img]url[/img]` (the alt text is dropped)
//!     - links: `[text](url)` → `[url=url]text[/url]`
//!     - emphasis: see [`emphasis`]
//!
//!     Code spans, images and link targets are finished markup once produced, so they are put on
//!     the line's [`Shelf`] and the rest of the cascade only sees a placeholder. Link text stays in
//!     the line because it may carry emphasis of its own.
//!
//!     Images must run before links: the link pattern is the image pattern without the leading
//!     `!`, and would otherwise swallow every image.

pub mod emphasis;

pub use emphasis::emphasis;

use crate::protect::Shelf;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

pub fn code_spans(line: &str, shelf: &mut Shelf) -> String {
    CODE_SPAN
        .replace_all(line, |caps: &Captures| {
            shelf.protect(format!("[code]{}[/code]", &caps[1]))
        })
        .into_owned()
}

pub fn images(line: &str, shelf: &mut Shelf) -> String {
    IMAGE
        .replace_all(line, |caps: &Captures| {
            shelf.protect(format!("[img]{}[/img]", &caps[2]))
        })
        .into_owned()
}

pub fn links(line: &str, shelf: &mut Shelf) -> String {
    LINK.replace_all(line, |caps: &Captures| {
        let open = shelf.protect(format!("[url={}]", &caps[2]));
        format!("{open}{}[/url]", &caps[1])
    })
    .into_owned()
}
