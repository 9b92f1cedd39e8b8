//! Fixed-width rendering of a rectangular window over table rows.
//!
//! The window selects a run of rows and a budget of display columns:
//!
//! ```text
//!            col_budget
//!   |<------------------------>|
//!   NAME  AGE  STATUS               <- header, always written
//!   Bob   45   Done                 <- rows[row_offset]
//!   ...                             <- at most row_limit rows
//! ```
//!
//! Columns are laid out left to right at their span width. The first column
//! that would push the line past the budget is dropped together with every
//! column after it, so a line never exceeds `col_budget` and no cell is split
//! across the edge.

use std::fmt;

use tsel_table::{Column, Row};

use crate::util::fit_to_width;

/// The visible region of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Index of the first row to draw. Clamped to the row count.
    pub row_offset: usize,
    /// Maximum number of data rows to draw.
    pub row_limit: usize,
    /// Number of leading columns to skip.
    pub col_offset: usize,
    /// Maximum display width of a line.
    pub col_budget: usize,
}

impl Window {
    /// A window with no row or width limits.
    pub fn unbounded() -> Self {
        Self {
            row_offset: 0,
            row_limit: usize::MAX,
            col_offset: 0,
            col_budget: usize::MAX,
        }
    }

    /// A window of `row_limit` rows starting at `row_offset`, `col_budget`
    /// columns wide.
    pub fn new(row_offset: usize, row_limit: usize, col_budget: usize) -> Self {
        Self {
            row_offset,
            row_limit,
            col_offset: 0,
            col_budget,
        }
    }

    /// Sets the number of leading columns to skip.
    pub fn with_col_offset(mut self, col_offset: usize) -> Self {
        self.col_offset = col_offset;
        self
    }

    /// The `[start, end)` range of rows this window shows out of `count`.
    pub fn row_range(&self, count: usize) -> (usize, usize) {
        let start = self.row_offset.min(count);
        let end = start.saturating_add(self.row_limit).min(count);
        (start, end)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Returns the columns that fit within the window's width budget.
pub fn visible_columns<'a>(columns: &[&'a Column], window: &Window) -> Vec<&'a Column> {
    let mut used = 0usize;
    columns
        .iter()
        .skip(window.col_offset)
        .take_while(|column| {
            let next = used.saturating_add(column.width());
            if next > window.col_budget {
                return false;
            }
            used = next;
            true
        })
        .copied()
        .collect()
}

/// Writes the header line and the windowed rows.
///
/// `columns` are drawn in the given order; `rows` are the already filtered
/// and ordered rows. Every line, the last included, ends with `\n`.
pub fn render<W: fmt::Write>(
    out: &mut W,
    columns: &[&Column],
    rows: &[&Row],
    window: &Window,
) -> fmt::Result {
    let visible = visible_columns(columns, window);

    for column in &visible {
        out.write_str(&fit_to_width(&column.name, column.width()))?;
    }
    out.write_char('\n')?;

    let (start, end) = window.row_range(rows.len());
    for row in &rows[start..end] {
        for column in &visible {
            out.write_str(&fit_to_width(row.cell(column.index), column.width()))?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Renders into a new string.
pub fn render_to_string(columns: &[&Column], rows: &[&Row], window: &Window) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = render(&mut out, columns, rows, window);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsel_table::{parse, Table};

    fn people() -> Table {
        parse(&[
            "NAME  AGE  STATUS",
            "Alice 30   Pending",
            "Bob   45   Done",
        ])
        .unwrap()
    }

    fn draw(table: &Table, window: Window) -> String {
        let columns: Vec<&Column> = table.schema().columns().iter().collect();
        let rows: Vec<&Row> = table.rows().iter().collect();
        render_to_string(&columns, &rows, &window)
    }

    #[test]
    fn renders_everything_unbounded() {
        let out = draw(&people(), Window::unbounded());
        insta::assert_snapshot!(out.replace(' ', "·"), @r"
        NAME··AGE··STATUS···
        Alice·30···Pending··
        Bob···45···Done·····
        ");
    }

    #[test]
    fn budget_drops_overflowing_columns() {
        let table = people();
        // NAME (6) + AGE (5) = 11 fits; STATUS (9) would need 20.
        let out = draw(&table, Window::new(0, 10, 19));
        assert_eq!(out, "NAME  AGE  \nAlice 30   \nBob   45   \n");

        let out = draw(&table, Window::new(0, 10, 5));
        assert_eq!(out, "\n\n\n");
    }

    #[test]
    fn row_window() {
        let table = people();
        let out = draw(&table, Window::new(1, 1, 80));
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().nth(1).unwrap().starts_with("Bob"));
    }

    #[test]
    fn offset_past_end_renders_header_only() {
        let out = draw(&people(), Window::new(10, 5, 80));
        assert_eq!(out, "NAME  AGE  STATUS   \n");
    }

    #[test]
    fn column_order_follows_selection() {
        let table = people();
        let schema = table.schema();
        let columns = vec![schema.get("STATUS").unwrap(), schema.get("NAME").unwrap()];
        let rows: Vec<&Row> = table.rows().iter().collect();
        let out = render_to_string(&columns, &rows, &Window::unbounded());
        assert_eq!(out.lines().nth(1).unwrap(), "Pending  Alice ");
    }

    #[test]
    fn col_offset_skips_leading_columns() {
        let out = draw(&people(), Window::new(0, 1, 80).with_col_offset(2));
        assert_eq!(out, "STATUS   \nPending  \n");
    }

    #[test]
    fn narrow_span_truncates_with_ellipsis() {
        // A single CSV column sized from its header: 9 + 2 columns.
        let table = tsel_table::parse_str("longish_h\nx").unwrap();
        let columns: Vec<&Column> = table.schema().columns().iter().collect();
        let row = Row::with_width(vec!["toolongvalue".into()], 1);
        let out = render_to_string(&columns, &[&row], &Window::unbounded());
        assert_eq!(out, "longish_h  \ntoolongval…\n");
    }

    #[test]
    fn wide_csv_cells_render_whole() {
        let table = tsel_table::parse_str("city,code\n東京都庁,1\nParis,22").unwrap();
        let columns: Vec<&Column> = table.schema().columns().iter().collect();
        let rows: Vec<&Row> = table.rows().iter().collect();
        let out = render_to_string(&columns, &rows, &Window::unbounded());
        assert_eq!(out, "city      code  \n東京都庁  1     \nParis     22    \n");
    }

    #[test]
    fn row_range_clamps() {
        let w = Window::new(3, 10, 80);
        assert_eq!(w.row_range(5), (3, 5));
        assert_eq!(w.row_range(2), (2, 2));
        assert_eq!(Window::unbounded().row_range(4), (0, 4));
    }
}
