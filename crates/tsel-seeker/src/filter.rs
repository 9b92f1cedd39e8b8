//! Predicate-list filtering over parsed rows.
//!
//! A [`Filter`] is an ordered list of predicates combined with AND. Before
//! any row is touched it is compiled against a [`Schema`], which resolves
//! every column name to an index:
//!
//! ```text
//! match = all predicates match   (empty list => every row matches)
//! ```
//!
//! Free-text predicates test the raw source line; comparisons test the
//! parsed cell.

use std::time::Instant;

use tracing::debug;
use tsel_table::{Row, Schema};

use crate::error::{Result, SeekerError};
use crate::natural;
use crate::op::Op;
use crate::predicate::Predicate;

/// An ordered conjunction of predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Creates an empty filter that matches every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a predicate.
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// The predicates in evaluation order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns `true` if no predicates are set.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Resolves column names against `schema`.
    ///
    /// # Errors
    ///
    /// [`SeekerError::UnknownColumn`] for the first comparison whose column
    /// the schema does not contain.
    pub fn compile(&self, schema: &Schema) -> Result<CompiledFilter> {
        let checks = self
            .predicates
            .iter()
            .map(|predicate| match predicate {
                Predicate::Substring(text) => Ok(Check::Substring(text.clone())),
                Predicate::Compare { column, op, value } => schema
                    .index_of(column)
                    .map(|index| Check::Compare {
                        index,
                        op: *op,
                        value: value.clone(),
                    })
                    .ok_or_else(|| SeekerError::unknown_column(column, "--where")),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledFilter { checks })
    }
}

impl From<Vec<Predicate>> for Filter {
    fn from(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }
}

impl FromIterator<Predicate> for Filter {
    fn from_iter<T: IntoIterator<Item = Predicate>>(iter: T) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
enum Check {
    Substring(String),
    Compare { index: usize, op: Op, value: String },
}

impl Check {
    fn matches(&self, row: &Row, raw_line: &str) -> bool {
        match self {
            Check::Substring(text) => raw_line.contains(text.as_str()),
            Check::Compare { index, op, value } => op.matches(row.cell(*index), value),
        }
    }
}

/// A filter whose column names have been resolved.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    checks: Vec<Check>,
}

impl CompiledFilter {
    /// Tests a single row against every predicate.
    pub fn matches(&self, row: &Row, raw_line: &str) -> bool {
        self.checks.iter().all(|check| check.matches(row, raw_line))
    }

    /// Returns the indices of matching rows, in source order.
    ///
    /// `raw_lines[i]` must be the source line of `rows[i]`; a missing raw line
    /// is treated as empty.
    pub fn evaluate(&self, rows: &[Row], raw_lines: &[String]) -> Vec<usize> {
        let started = Instant::now();
        let matched: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(i, row)| {
                let raw = raw_lines.get(*i).map(String::as_str).unwrap_or("");
                self.matches(row, raw)
            })
            .map(|(i, _)| i)
            .collect();
        debug!(
            predicates = self.checks.len(),
            rows = rows.len(),
            matched = matched.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "filter evaluated"
        );
        matched
    }
}

/// Distinct values of one column, sorted naturally.
pub fn distinct_values(rows: &[Row], column: usize) -> Vec<String> {
    let mut values: Vec<&str> = rows.iter().map(|row| row.cell(column)).collect();
    values.sort_by(|a, b| natural::compare(a, b).then_with(|| a.cmp(b)));
    values.dedup();
    values.into_iter().map(str::to_string).collect()
}
