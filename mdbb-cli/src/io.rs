use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures reading the source document or writing the result.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("cannot read '{shown}': {source}", shown = .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read standard input: {0}")]
    ReadStdin(#[source] io::Error),
    #[error("cannot write '{shown}': {source}", shown = .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write standard output: {0}")]
    WriteStdout(#[source] io::Error),
}

/// Where the Markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Picks the input from the `--file` and `--input` options; `--file` wins, stdin is the
    /// fallback.
    pub fn from_args(file: Option<&str>, input: Option<&str>) -> Self {
        match file.or(input) {
            Some(path) => InputSource::File(PathBuf::from(path)),
            None => InputSource::Stdin,
        }
    }

    /// Reads the whole document.
    pub fn read(&self) -> Result<String, IoError> {
        match self {
            InputSource::Stdin => io::read_to_string(io::stdin()).map_err(IoError::ReadStdin),
            InputSource::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where the BBCode goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) => OutputTarget::File(PathBuf::from(path)),
            None => OutputTarget::Stdout,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, OutputTarget::File(_))
    }

    /// Writes `text` in one go. No trailing newline is added.
    pub fn write(&self, text: &str) -> Result<(), IoError> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(IoError::WriteStdout)
            }
            OutputTarget::File(path) => fs::write(path, text).map_err(|source| IoError::WriteOutput {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| IoError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
