//! Command-line parsing.
//!
//! [`Cli`] is the clap surface; [`Options`] is what the rest of the program
//! consumes. Converting between them parses every `--where` spec, so a
//! malformed predicate is reported before any input is read.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tsel_seeker::{OrderBy, Predicate, SeekerError};
use tsel_table::Source;

use crate::logging::LogConfig;

/// tsel helps filter, sort and display tabular data.
///
/// Reads a whitespace-aligned table (like `ps`, `kubectl get` or `docker ps`
/// output) or CSV, and prints the selected columns of the matching rows.
#[derive(Debug, Parser)]
#[command(name = "tsel", version, about, long_about = None)]
pub struct Cli {
    /// Show only rows whose source line contains PATTERN.
    pub pattern: Option<String>,

    /// Input file; overrides --file.
    #[arg(value_name = "FILE")]
    pub input: Option<String>,

    /// Read from FILE, `-` for stdin.
    #[arg(short = 'f', long = "file", value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Comma separated column names, or ALL.
    #[arg(short, long, value_name = "COLUMNS", env = "TSEL_SELECT", default_value = "ALL")]
    pub select: String,

    /// Show only rows matching COL<op>VALUE (=, ==, !=, <>, <, <=, >, >=) or
    /// containing the text. Repeatable; all must match.
    #[arg(short, long = "where", value_name = "PREDICATE")]
    pub wheres: Vec<String>,

    /// Sort output by COLUMN; prefix with `-` for descending.
    #[arg(short, long, value_name = "COLUMN", allow_hyphen_values = true)]
    pub order_by: Option<String>,

    /// Browse, select and filter interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format for non-interactive runs.
    #[arg(long, value_enum, env = "TSEL_FORMAT", default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write debug logs to a file.
    #[arg(short, long, env = "TSEL_DEBUG")]
    pub debug: bool,

    /// Debug log location.
    #[arg(long, value_name = "PATH", env = "TSEL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// More output on stderr; repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Non-interactive output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width columns.
    #[default]
    Table,
    /// RFC 4180 CSV with a header record.
    Csv,
    /// Array of objects keyed by column name.
    Json,
}

/// Everything a run needs, independent of clap.
#[derive(Debug, Clone)]
pub struct Options {
    pub source: Source,
    pub select: String,
    pub predicates: Vec<Predicate>,
    pub order_by: Option<OrderBy>,
    pub interactive: bool,
    pub format: OutputFormat,
    pub log: LogConfig,
}

impl TryFrom<Cli> for Options {
    type Error = SeekerError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let predicates = build_predicates(cli.pattern.as_deref(), &cli.wheres)?;
        let source = Source::from_arg(cli.input.as_deref().unwrap_or(&cli.file));

        Ok(Options {
            source,
            select: cli.select,
            predicates,
            order_by: cli.order_by.as_deref().map(OrderBy::parse),
            interactive: cli.interactive,
            format: cli.format,
            log: LogConfig {
                debug: cli.debug,
                log_file: cli.log_file,
                verbosity: cli.verbose,
                interactive: cli.interactive,
            },
        })
    }
}

/// Orders predicates the way they are evaluated and printed back.
///
/// The positional pattern comes first; each free-text `--where` is then
/// placed in front of everything before it, and comparisons follow in the
/// order given.
pub fn build_predicates(pattern: Option<&str>, wheres: &[String]) -> Result<Vec<Predicate>, SeekerError> {
    let mut predicates = Vec::new();
    if let Some(pattern) = pattern {
        predicates.push(Predicate::substring(pattern));
    }
    for spec in wheres {
        let predicate = Predicate::parse(spec)?;
        if predicate.is_substring() {
            predicates.insert(0, predicate);
        } else {
            predicates.push(predicate);
        }
    }
    Ok(predicates)
}
