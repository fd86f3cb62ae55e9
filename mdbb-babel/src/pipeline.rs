//! The conversion pipeline
//!
//!     Conversion is a fixed sequence of named stages. Per normal (non-code) line:
//!
//!         header → code-span → image → link → unordered-item → quote → horizontal-rule → emphasis
//!
//!     and per document:
//!
//!         block scan (runs the line stages) → ordered-list fold → cleanup
//!
//!     The order is load bearing. Code spans are shelved before anything else can look inside
//!     them, images must beat links to the `[..](..)` syntax, and emphasis goes last so it only
//!     sees what no structural rule claimed. [`LINE_STAGES`] is the single place the per-line
//!     order is declared.

use crate::blocks;
use crate::cleanup::{self, CleanupRules};
use crate::inline;
use crate::line;
use crate::lists;
use crate::protect::Shelf;

/// A named per-line conversion step.
#[derive(Clone, Copy)]
pub struct LineStage {
    pub name: &'static str,
    pub apply: fn(&str, &mut Shelf) -> String,
}

impl std::fmt::Debug for LineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineStage").field("name", &self.name).finish()
    }
}

/// Per-line stages in the order they run.
pub const LINE_STAGES: &[LineStage] = &[
    LineStage {
        name: "header",
        apply: header_stage,
    },
    LineStage {
        name: "code-span",
        apply: inline::code_spans,
    },
    LineStage {
        name: "image",
        apply: inline::images,
    },
    LineStage {
        name: "link",
        apply: inline::links,
    },
    LineStage {
        name: "unordered-item",
        apply: line::unordered_item,
    },
    LineStage {
        name: "quote",
        apply: quote_stage,
    },
    LineStage {
        name: "horizontal-rule",
        apply: horizontal_rule_stage,
    },
    LineStage {
        name: "emphasis",
        apply: emphasis_stage,
    },
];

fn header_stage(text: &str, _shelf: &mut Shelf) -> String {
    line::header(text)
}

fn quote_stage(text: &str, _shelf: &mut Shelf) -> String {
    line::quote(text)
}

fn horizontal_rule_stage(text: &str, _shelf: &mut Shelf) -> String {
    line::horizontal_rule(text)
}

fn emphasis_stage(text: &str, _shelf: &mut Shelf) -> String {
    inline::emphasis(text)
}

/// Converts one line that is not inside a fenced code block.
pub fn convert_line(text: &str) -> String {
    let (mut shelf, mut current) = Shelf::open(text);
    for stage in LINE_STAGES {
        current = (stage.apply)(&current, &mut shelf);
    }
    shelf.restore(&current)
}

/// Markdown to BBCode converter.
///
/// Holds only immutable settings; every call to [`Converter::convert`] owns its scanning state,
/// so one converter can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converter {
    rules: CleanupRules,
}

impl Converter {
    pub fn new(rules: CleanupRules) -> Self {
        Converter { rules }
    }

    pub fn rules(&self) -> &CleanupRules {
        &self.rules
    }

    /// Converts a complete Markdown document. Never fails: markup that does not parse is passed
    /// through as text.
    pub fn convert(&self, markdown: &str) -> String {
        let _span = tracing::debug_span!("convert", bytes = markdown.len()).entered();

        let document = blocks::scan(markdown);
        tracing::debug!(
            fragments = document.len(),
            code_blocks = document.code_blocks(),
            "scanned blocks"
        );

        let document = lists::fold_ordered_lists(document);
        let output = cleanup::post_process(&document, &self.rules);
        tracing::debug!(bytes = output.len(), "conversion finished");
        output
    }
}
