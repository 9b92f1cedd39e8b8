//! Input shape detection and table parsing.
//!
//! Two shapes are recognised:
//!
//! - **Fixed-width**: the header is split on runs of two or more spaces and
//!   each token's span runs up to the next token's position in the header.
//!   The last span extends to the longest line so ragged free-text columns
//!   are captured whole.
//! - **Delimited**: RFC 4180 CSV with the first record as header. This is
//!   also the fallback for single-column input.
//!
//! ```text
//! NAME  AGE  STATUS
//! ^     ^    ^
//! 0     6    11 ........ max line length + 2
//! ```

use std::collections::HashSet;

use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

use crate::error::{FormatError, Result};
use crate::schema::{Row, Schema};

/// Extra padding appended to computed widths so adjacent columns never touch.
const COLUMN_PADDING: usize = 2;

/// Shape of the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Whitespace-aligned columns sliced by character span.
    FixedWidth,
    /// Comma-separated values.
    Delimited,
}

impl TableFormat {
    /// Returns the display name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            TableFormat::FixedWidth => "fixed-width",
            TableFormat::Delimited => "csv",
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed table: schema, rows and the raw source line of every row.
///
/// `rows[i]` was parsed from `raw_lines[i]`. The table is immutable once
/// built.
#[derive(Debug, Clone)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
    raw_lines: Vec<String>,
    format: TableFormat,
}

impl Table {
    /// The column schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// All body rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The unsplit source text of every body row.
    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The detected input shape.
    pub fn format(&self) -> TableFormat {
        self.format
    }
}

/// Parses a complete text into a table. Line endings may be `\n` or `\r\n`.
pub fn parse_str(content: &str) -> Result<Table> {
    let lines: Vec<&str> = content.lines().collect();
    parse(&lines)
}

/// Parses header and body lines into a table.
///
/// # Errors
///
/// - [`FormatError::Empty`] when `lines` is empty
/// - [`FormatError::DuplicateColumn`] when the header repeats a name
/// - [`FormatError::EmptyColumn`] / [`FormatError::Csv`] for malformed CSV
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Table> {
    let (header, body) = lines.split_first().ok_or(FormatError::Empty)?;
    let header = header.as_ref();

    let tokens = split_header(header);
    let format = detect_format(header);
    debug!(%format, columns = tokens.len(), lines = lines.len(), "detected input shape");

    match format {
        TableFormat::FixedWidth => parse_fixed_width(header, &tokens, body),
        TableFormat::Delimited => parse_delimited(lines),
    }
}

/// Decides the input shape from the header line alone.
pub fn detect_format(header: &str) -> TableFormat {
    if split_header(header).len() > 1 {
        TableFormat::FixedWidth
    } else {
        TableFormat::Delimited
    }
}

/// Splits a header on runs of two or more spaces, dropping empty tokens.
pub fn split_header(header: &str) -> Vec<&str> {
    header
        .split("  ")
        .map(|token| token.trim_matches(' '))
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_fixed_width<S: AsRef<str>>(header: &str, tokens: &[&str], body: &[S]) -> Result<Table> {
    let header_len = header.chars().count();
    ensure_unique(tokens.iter().copied())?;

    let mut spans = Vec::with_capacity(tokens.len());
    let mut start = 0;
    for (i, name) in tokens.iter().enumerate() {
        let stop = match tokens.get(i + 1) {
            Some(next) => {
                // Search past the current name so a following name that is a
                // substring of this one is not matched early.
                let at = find_from(header, name, start).unwrap_or(start);
                let from = at + name.chars().count();
                find_from(header, next, from).unwrap_or(header_len)
            }
            None => header_len,
        };
        spans.push((*name, start, stop));
        start = stop;
    }

    let mut schema = Schema::from_spans(spans)?;

    let longest = body
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    schema.set_last_stop(longest.max(header_len) + COLUMN_PADDING);

    let rows = body
        .iter()
        .map(|line| {
            schema
                .columns()
                .iter()
                .map(|c| slice_chars(line.as_ref(), c.start, c.stop).trim())
                .collect()
        })
        .collect();
    let raw_lines = body.iter().map(|l| l.as_ref().to_string()).collect();

    Ok(Table {
        schema,
        rows,
        raw_lines,
        format: TableFormat::FixedWidth,
    })
}

fn parse_delimited<S: AsRef<str>>(lines: &[S]) -> Result<Table> {
    let content = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|e| FormatError::csv(&e))?.clone();
    if let Some(pos) = headers.iter().position(str::is_empty) {
        return Err(FormatError::EmptyColumn(pos));
    }
    ensure_unique(headers.iter())?;

    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.width() + COLUMN_PADDING)
        .collect();
    let mut schema = Schema::from_spans(headers.iter().map(|h| (h, 0, 0)))?;
    let columns = schema.len();

    let mut rows = Vec::new();
    let mut offsets = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| FormatError::csv(&e))?;
        if record.len() != columns {
            warn!(
                expected = columns,
                found = record.len(),
                line = record.position().map(|p| p.line()).unwrap_or(0),
                "ragged CSV record"
            );
        }
        for (i, value) in record.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(value.width() + COLUMN_PADDING);
        }
        offsets.push(record.position().map(|p| p.byte() as usize).unwrap_or(0));
        rows.push(Row::with_width(
            record.iter().map(str::to_string).collect(),
            columns,
        ));
    }

    for (i, width) in widths.into_iter().enumerate() {
        schema.set_stop(i, width);
    }

    let raw_lines = offsets
        .iter()
        .enumerate()
        .map(|(i, &begin)| {
            let end = offsets.get(i + 1).copied().unwrap_or(content.len());
            content
                .get(begin..end)
                .unwrap_or("")
                .trim_end_matches(['\r', '\n'])
                .to_string()
        })
        .collect();

    Ok(Table {
        schema,
        rows,
        raw_lines,
        format: TableFormat::Delimited,
    })
}

fn ensure_unique<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(FormatError::DuplicateColumn(name.to_string()));
        }
    }
    Ok(())
}

/// Byte offset of the `chars`-th character, or the string length past the end.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len())
}

/// Slices `line` by character offsets `[start, stop)`.
///
/// Offsets past the end of the line yield an empty or shortened slice.
pub fn slice_chars(line: &str, start: usize, stop: usize) -> &str {
    if stop <= start {
        return "";
    }
    let begin = byte_offset(line, start);
    let end = begin + byte_offset(&line[begin..], stop - start);
    &line[begin..end]
}

/// Character index of the first occurrence of `needle` at or after character
/// offset `from`.
fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let begin = byte_offset(haystack, from);
    let rest = &haystack[begin..];
    rest.find(needle)
        .map(|found| from + rest[..found].chars().count())
}
