//! Markdown to BBCode conversion
//!
//!     This crate converts Markdown documents into the BBCode dialect understood by most
//!     bulletin boards: headers, emphasis, code spans and blocks, links, images, lists, quotes and
//!     horizontal rules.
//!
//!     It is not a Markdown parser. There is no AST, no CommonMark compliance and no way back
//!     from BBCode. A document is converted in one pass over its lines by an ordered set of text
//!     rules, followed by two whole-document passes. Markup that does not line up (a fence that is
//!     never closed, a lone `**`) is passed through as text; conversion never fails.
//!
//!     This is a pure lib, it powers the md-to-bbcode cli but no code here reads files, looks at
//!     the environment or prints.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── pipeline.rs             # Stage order, convert_line and Converter
//!     ├── blocks.rs               # Block scanner: fenced code vs normal lines
//!     ├── line.rs                 # Line classifier: headers, items, quotes, rules
//!     ├── inline
//!     │   ├── mod.rs              # Code spans, images, links
//!     │   └── emphasis.rs         # Bold / italic / strikethrough cascade
//!     ├── lists.rs                # Ordered-list folding
//!     ├── cleanup.rs              # Post-processing cleanups
//!     ├── protect.rs              # Placeholder shelf for finished markup
//!     └── document.rs             # Fragments of a document in conversion
//!
//!     Data flows: text → blocks::scan (runs pipeline::convert_line on every normal line) →
//!     lists::fold_ordered_lists → cleanup::post_process → text.
//!
//! Core Algorithms
//!
//!     The rules are independent text substitutions, which makes their order the whole game.
//!     Code spans must be out of the way before emphasis runs, images must be matched before
//!     links, list folding must see lines that are already converted, and the cleanups repair
//!     what independent rules leave behind (one `[quote]` per line, for instance).
//!     The order is declared once in [`pipeline::LINE_STAGES`] and tested as such.
//!
//!     Rules that produce finished markup put it on a [`protect::Shelf`] so that later rules
//!     cannot rewrite it; see protect.rs.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── markdown
//!     │   ├── <construct>.rs
//!     │   └── ...
//!     ├── properties
//!     │   └── mod.rs
//!     └── fixtures
//!         └── kitchensink.md
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod blocks;
pub mod cleanup;
pub mod document;
pub mod inline;
pub mod line;
pub mod lists;
pub mod pipeline;
pub mod protect;

pub use cleanup::CleanupRules;
pub use document::{Document, Fragment};
pub use pipeline::{convert_line, Converter};

/// Converts a Markdown document to BBCode with the default cleanup rules.
pub fn convert(markdown: &str) -> String {
    Converter::default().convert(markdown)
}
