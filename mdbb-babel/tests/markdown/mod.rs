//! Markdown → BBCode conversion tests
//!
//! One file per construct, plus whole documents.

mod documents;
mod emphasis;
mod headers;
mod structure;
