//! Input sources: a file on disk or standard input.
//!
//! Standard input is read through the [`StdinReader`] trait so loading can be
//! tested without piping data into the test process.

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FormatError, Result};
use crate::parse::{parse, Table};

/// Abstraction over stdin reading.
pub trait StdinReader {
    /// Returns `true` if stdin is interactive rather than piped.
    fn is_terminal(&self) -> bool;

    /// Reads all content from stdin.
    fn read_to_string(&self) -> io::Result<String>;
}

/// Stdin reader backed by the process's standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Canned stdin for tests.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: String,
}

impl MockStdin {
    /// Simulates piped input.
    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            is_terminal: false,
            content: content.into(),
        }
    }

    /// Simulates an interactive terminal with nothing typed.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: String::new(),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }
}

/// Where the table text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file path.
    File(PathBuf),
}

impl Source {
    /// Interprets a command-line argument: `-` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    /// Human readable name, used in log lines and error context.
    pub fn describe(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::File(path.to_path_buf())
    }
}

/// Reads all lines from `source`, stripping `\n` and `\r\n` terminators.
pub fn read_lines(source: &Source, stdin: &dyn StdinReader) -> Result<Vec<String>> {
    let content = match source {
        Source::Stdin => {
            if stdin.is_terminal() {
                debug!("stdin is a terminal; reading until end of input");
            }
            stdin.read_to_string().map_err(FormatError::Io)?
        }
        Source::File(path) => {
            let bytes = std::fs::read(path).map_err(FormatError::Io)?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
    };
    Ok(content.lines().map(str::to_string).collect())
}

/// Reads and parses a table from `source`.
pub fn load(source: &Source, stdin: &dyn StdinReader) -> Result<Table> {
    let lines = read_lines(source, stdin)?;
    let table = parse(&lines)?;
    info!(
        source = %source.describe(),
        format = %table.format(),
        columns = table.schema().len(),
        rows = table.row_count(),
        "loaded table"
    );
    Ok(table)
}
