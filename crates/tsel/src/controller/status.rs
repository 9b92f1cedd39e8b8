//! The two-line status bar at the bottom of every screen.

use std::io;

use tsel_render::Window;

use crate::session::Session;
use crate::terminal::{Attr, Terminal};

pub(super) const MAIN_HINT: &str = "s: select    w: where    ?: help    q: quit";
pub(super) const SELECT_HINT: &str =
    "↑↓/kj: Select column    Space: Toggle column    ←→/hl: Rearrange order    Enter: Return to main view";
pub(super) const FILTER_HINT: &str =
    "←→/hl: column/value dropdown   =/</>/!: Change comparison   Enter: Apply   Esc: Cancel";
pub(super) const HELP_HINT: &str = "Press any key to return    q: quit";

/// Writes the reverse-video hint line and the message line.
pub(super) fn draw<T: Terminal>(term: &mut T, hint: &str, message: &str) -> io::Result<()> {
    let (rows, cols) = term.size();
    if rows < 2 {
        return Ok(());
    }
    term.put(rows - 2, 0, &format!("{hint:<cols$}"), Attr::REVERSE)?;
    term.put(rows - 1, 0, message, Attr::NORMAL)
}

/// `rows a-b of n`, plus `(filtered from m)` when predicates are active.
pub(super) fn position(window: &Window, session: &Session<'_>) -> String {
    let count = session.filtered_count();
    let (start, end) = window.row_range(count);

    let mut message = if end > start {
        format!("rows {}-{} of {}", start + 1, end, count)
    } else {
        format!("no rows shown of {count}")
    };
    if !session.predicates().is_empty() {
        message.push_str(&format!(" (filtered from {})", session.table().row_count()));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MockTerminal;
    use tsel_seeker::Predicate;
    use tsel_table::parse;

    #[test]
    fn hint_line_is_reversed_and_full_width() {
        let mut term = MockTerminal::new(4, 20);
        draw(&mut term, "hint", "message").unwrap();
        assert_eq!(term.line(2), "hint");
        assert_eq!(term.attr_at(2, 19), Attr::REVERSE);
        assert_eq!(term.line(3), "message");
        assert_eq!(term.attr_at(3, 0), Attr::NORMAL);
    }

    #[test]
    fn position_messages() {
        let table = parse(&["A  B", "1  x", "2  y", "3  x"]).unwrap();
        let session = crate::session::Session::new(&table, "ALL", Vec::new(), None).unwrap();
        assert_eq!(position(&Window::new(0, 2, 80), &session), "rows 1-2 of 3");
        assert_eq!(position(&Window::new(3, 2, 80), &session), "no rows shown of 3");

        let filtered =
            crate::session::Session::new(&table, "ALL", vec![Predicate::substring("x")], None)
                .unwrap();
        assert_eq!(
            position(&Window::new(0, 10, 80), &filtered),
            "rows 1-2 of 2 (filtered from 3)"
        );
    }
}
