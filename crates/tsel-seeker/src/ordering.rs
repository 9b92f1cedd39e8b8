//! Output ordering by a single column.

use std::cmp::Ordering;
use std::fmt;

use tsel_table::{Row, Schema};

use crate::error::{Result, SeekerError};
use crate::natural;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// Sort rows by one column, naturally.
///
/// Written on the command line as `COL` (ascending) or `-COL` (descending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// The column to sort by.
    pub column: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates an ascending ordering.
    pub fn asc(column: impl Into<String>) -> Self {
        OrderBy {
            column: column.into(),
            dir: Dir::Asc,
        }
    }

    /// Creates a descending ordering.
    pub fn desc(column: impl Into<String>) -> Self {
        OrderBy {
            column: column.into(),
            dir: Dir::Desc,
        }
    }

    /// Parses `COL` or `-COL`.
    pub fn parse(spec: &str) -> Self {
        match spec.strip_prefix('-') {
            Some(column) => OrderBy::desc(column.trim()),
            None => OrderBy::asc(spec.trim()),
        }
    }

    /// Resolves the column against `schema`.
    pub fn compile(&self, schema: &Schema) -> Result<CompiledOrder> {
        let index = schema
            .index_of(&self.column)
            .ok_or_else(|| SeekerError::unknown_column(&self.column, "--order-by"))?;
        Ok(CompiledOrder {
            index,
            dir: self.dir,
        })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dir {
            Dir::Asc => f.write_str(&self.column),
            Dir::Desc => write!(f, "-{}", self.column),
        }
    }
}

/// An ordering whose column has been resolved to an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledOrder {
    index: usize,
    dir: Dir,
}

impl CompiledOrder {
    /// Stable-sorts row indices by the column's cells.
    pub fn sort(&self, rows: &[Row], indices: &mut [usize]) {
        let cell = |i: usize| rows.get(i).map(|row| row.cell(self.index)).unwrap_or("");
        indices.sort_by(|&a, &b| self.dir.apply(natural::compare(cell(a), cell(b))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsel_table::parse;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(OrderBy::parse("NAME"), OrderBy::asc("NAME"));
        assert_eq!(OrderBy::parse("-NAME"), OrderBy::desc("NAME"));
        assert_eq!(OrderBy::desc("AGE").to_string(), "-AGE");
        assert_eq!(OrderBy::asc("AGE").to_string(), "AGE");
    }

    #[test]
    fn sort_is_natural_and_stable() {
        let table = parse(&["F     K", "a10   x", "a9    y", "a10   z", "a100  w"]).unwrap();
        let order = OrderBy::asc("F").compile(table.schema()).unwrap();

        let mut indices: Vec<usize> = (0..table.row_count()).collect();
        order.sort(table.rows(), &mut indices);
        assert_eq!(indices, vec![1, 0, 2, 3]);

        let desc = OrderBy::desc("F").compile(table.schema()).unwrap();
        let mut indices: Vec<usize> = (0..table.row_count()).collect();
        desc.sort(table.rows(), &mut indices);
        assert_eq!(indices, vec![3, 0, 2, 1]);
    }

    #[test]
    fn unknown_column() {
        let table = parse(&["A  B", "1  2"]).unwrap();
        let err = OrderBy::parse("-C").compile(table.schema()).unwrap_err();
        assert_eq!(err, SeekerError::unknown_column("C", "--order-by"));
    }
}
