//! Property-based tests for the viewport renderer.

use proptest::prelude::*;
use tsel_render::{display_width, render_to_string, truncate_to_width, Window};
use tsel_table::{parse, Column, Row, Table};

fn table_strategy() -> impl Strategy<Value = Table> {
    let cell = "[a-z0-9]{1,8}";
    prop::collection::vec((cell, cell, cell), 0..30).prop_map(|rows| {
        let mut lines = vec![format!("{:<10}{:<10}{}", "ALPHA", "BETA", "GAMMA")];
        for (a, b, c) in rows {
            lines.push(format!("{a:<10}{b:<10}{c}"));
        }
        parse(&lines).unwrap()
    })
}

fn draw(table: &Table, window: &Window) -> String {
    let columns: Vec<&Column> = table.schema().columns().iter().collect();
    let rows: Vec<&Row> = table.rows().iter().collect();
    render_to_string(&columns, &rows, window)
}

proptest! {
    /// No line is ever wider than the budget.
    #[test]
    fn lines_respect_budget(table in table_strategy(), budget in 0usize..40, offset in 0usize..40) {
        let out = draw(&table, &Window::new(offset, 50, budget));
        for line in out.lines() {
            prop_assert!(display_width(line) <= budget);
        }
    }

    /// Header plus at most `row_limit` rows, never more than remain.
    #[test]
    fn row_count_is_windowed(table in table_strategy(), offset in 0usize..40, limit in 0usize..40) {
        let out = draw(&table, &Window::new(offset, limit, 200));
        let expected = limit.min(table.row_count().saturating_sub(offset));
        prop_assert_eq!(out.lines().count(), 1 + expected);
    }

    /// Unfiltered, fully selected, unbounded output reproduces parsed cells.
    #[test]
    fn unbounded_output_reproduces_cells(table in table_strategy()) {
        let out = draw(&table, &Window::unbounded());
        let reparsed = parse(&out.lines().collect::<Vec<_>>()).unwrap();
        prop_assert_eq!(reparsed.rows(), table.rows());
    }

    #[test]
    fn truncation_never_exceeds_width(s in "[a-zA-Z 日本語é]{0,30}", width in 0usize..20) {
        prop_assert!(display_width(&truncate_to_width(&s, width)) <= width);
    }
}
