//! Column schema and row types.
//!
//! A [`Schema`] is an ordered list of [`Column`] records with a name lookup.
//! Columns keep the character span they were sliced from so the renderer can
//! reproduce the source layout.

use std::collections::HashMap;

use crate::error::{FormatError, Result};

/// A single column of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name as it appeared in the header.
    pub name: String,
    /// Ordinal position in the schema.
    pub index: usize,
    /// First character offset of the span (inclusive).
    pub start: usize,
    /// Last character offset of the span (exclusive).
    pub stop: usize,
}

impl Column {
    /// Display width of the column, i.e. the length of its span.
    pub fn width(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }
}

/// Ordered column definitions with lookup by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Builds a schema from `(name, start, stop)` spans in declaration order.
    ///
    /// Fails on duplicate names.
    pub fn from_spans<I, S>(spans: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize, usize)>,
        S: Into<String>,
    {
        let mut columns = Vec::new();
        let mut by_name = HashMap::new();

        for (index, (name, start, stop)) in spans.into_iter().enumerate() {
            let name = name.into();
            if by_name.insert(name.clone(), index).is_some() {
                return Err(FormatError::DuplicateColumn(name));
            }
            columns.push(Column {
                name,
                index,
                start,
                stop,
            });
        }

        Ok(Self { columns, by_name })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Iterates over column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Looks up the ordinal of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Looks up a column by name.
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.index_of(name).map(|i| &self.columns[i])
    }

    /// Returns `true` if a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Overrides the stop offset of the last column.
    pub(crate) fn set_last_stop(&mut self, stop: usize) {
        if let Some(last) = self.columns.last_mut() {
            last.stop = stop;
        }
    }

    /// Overrides the stop offset of the column at `index`.
    pub(crate) fn set_stop(&mut self, index: usize, stop: usize) {
        if let Some(column) = self.columns.get_mut(index) {
            column.stop = stop;
        }
    }
}

/// One parsed body line: a trimmed cell per schema column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Creates a row, padding or truncating to exactly `width` cells.
    pub fn with_width(mut cells: Vec<String>, width: usize) -> Self {
        cells.resize(width, String::new());
        Self { cells }
    }

    /// Returns the cell at `index`, or `""` when out of range.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    /// All cells in schema order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}
