//! Input and output plumbing for the md-to-bbcode command.
//!
//! The converter itself works on complete strings. This crate decides where the string comes
//! from (a file or stdin) and where the result goes (a file or stdout), and turns failures there
//! into [`IoError`]s the binary can report.

pub mod io;
