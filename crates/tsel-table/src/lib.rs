//! Table loading for tsel.
//!
//! Turns a block of text lines into a [`Table`]: a [`Schema`] of named
//! columns, one [`Row`] of trimmed cells per body line, and the raw source
//! line of each row.
//!
//! Two input shapes are detected from the header:
//!
//! | Header | Shape | Column spans |
//! |--------|-------|--------------|
//! | two or more tokens separated by 2+ spaces | fixed-width | character offsets in the header |
//! | anything else | CSV | computed from the widest value |
//!
//! # Example
//!
//! ```rust
//! use tsel_table::{parse_str, TableFormat};
//!
//! let table = parse_str("NAME  AGE\nAlice 30\nBob   45").unwrap();
//!
//! assert_eq!(table.format(), TableFormat::FixedWidth);
//! assert_eq!(table.schema().names().collect::<Vec<_>>(), vec!["NAME", "AGE"]);
//! assert_eq!(table.rows()[1].cell(1), "45");
//! ```

mod error;
mod parse;
mod schema;
mod source;

pub use error::{FormatError, Result};
pub use parse::{detect_format, parse, parse_str, slice_chars, split_header, Table, TableFormat};
pub use schema::{Column, Row, Schema};
pub use source::{load, read_lines, MockStdin, RealStdin, Source, StdinReader};
