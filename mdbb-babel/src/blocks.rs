//! Block scanner
//!
//! Walks the document line by line and splits it into fenced code blocks, which are kept
//! verbatim, and normal lines, which go through [`convert_line`].
//!
//! A line whose trimmed text starts with three backticks toggles the fence. Whatever follows the
//! opening marker is the language tag; it is recorded and dropped, BBCode has nowhere to put it.
//! An unterminated fence is closed at the end of the document instead of being lost.

use crate::document::{Document, Fragment};
use crate::pipeline::convert_line;

const FENCE: &str = "```";

#[derive(Debug, Default)]
struct ScannerState {
    in_code_block: bool,
    pending: Vec<String>,
    language: Option<String>,
}

impl ScannerState {
    fn open(&mut self, info: &str) {
        let info = info.trim();
        self.in_code_block = true;
        self.pending.clear();
        self.language = (!info.is_empty()).then(|| info.to_string());
    }

    fn close(&mut self) -> Fragment {
        self.in_code_block = false;
        self.language = None;
        Fragment::code(std::mem::take(&mut self.pending).join("\n"))
    }

    /// Closes a fence still open at the end of input.
    ///
    /// Trailing blank lines are the document's own line ending, not code. Nothing is emitted if
    /// no code remains.
    fn finish(mut self) -> Option<Fragment> {
        if !self.in_code_block {
            return None;
        }
        while self
            .pending
            .last()
            .is_some_and(|line| line.trim().is_empty())
        {
            self.pending.pop();
        }
        tracing::trace!(
            lines = self.pending.len(),
            language = ?self.language,
            "closing unterminated code fence"
        );
        if self.pending.is_empty() {
            None
        } else {
            Some(self.close())
        }
    }
}

/// Scans `markdown` into a document of converted lines and code blocks.
pub fn scan(markdown: &str) -> Document {
    let mut state = ScannerState::default();
    let mut document = Document::new();

    for raw in markdown.split('\n') {
        if let Some(info) = raw.trim().strip_prefix(FENCE) {
            if state.in_code_block {
                document.push(state.close());
            } else {
                state.open(info);
                tracing::trace!(language = ?state.language, "opened code fence");
            }
            continue;
        }

        if state.in_code_block {
            state.pending.push(raw.to_string());
        } else {
            document.push(Fragment::line(convert_line(raw)));
        }
    }

    if let Some(fragment) = state.finish() {
        document.push(fragment);
    }
    document
}
