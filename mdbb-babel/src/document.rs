//! Document representation shared by the pipeline stages
//!
//! There is no tree here. A document is the ordered list of output fragments the block scanner
//! produced: converted lines and verbatim code blocks. Keeping code blocks as their own fragment
//! lets the document-wide passes (list folding, cleanup) skip them without re-detecting fences.

use std::fmt;

/// One unit of converted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A single converted line, without its line terminator
    Line(String),
    /// The verbatim body of a fenced code block, lines joined with `\n`
    Code(String),
}

impl Fragment {
    pub fn line(text: impl Into<String>) -> Self {
        Fragment::Line(text.into())
    }

    pub fn code(body: impl Into<String>) -> Self {
        Fragment::Code(body.into())
    }

    /// The line text, if this fragment is a line.
    pub fn as_line(&self) -> Option<&str> {
        match self {
            Fragment::Line(text) => Some(text),
            Fragment::Code(_) => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Fragment::Code(_))
    }

    /// Target markup for this fragment.
    pub fn render(&self) -> String {
        match self {
            Fragment::Line(text) => text.clone(),
            Fragment::Code(body) => format!("[code]{body}[/code]"),
        }
    }
}

/// Ordered fragments of a document in conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fragments: Vec<Fragment>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of code block fragments.
    pub fn code_blocks(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_code()).count()
    }

    /// Joins the rendered fragments with `\n`.
    pub fn render(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<Fragment>> for Document {
    fn from(fragments: Vec<Fragment>) -> Self {
        Document { fragments }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
