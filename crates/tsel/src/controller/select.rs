//! SELECT_COLUMNS: toggle and reorder displayed columns.
//!
//! The cursor walks the selected columns (in display order) followed by the
//! unselected ones (in schema order). Edits apply immediately.

use std::io;

use super::status::{self, SELECT_HINT};
use super::{scroll_start, wrap_cursor, Command, Context, Mode, Transition};
use crate::session::Session;
use crate::terminal::{Attr, Key, Terminal};

/// First list row on screen; row 0 holds the title.
const LIST_TOP: usize = 2;

pub(super) fn handle(cursor: usize, key: Key, ctx: &Context<'_, '_>) -> Transition {
    let selection = ctx.session.selection();
    let schema = ctx.session.table().schema();
    let total = schema.len();
    let selected = selection.len();

    let stay = |cursor: usize| Mode::SelectColumns { cursor };

    match key {
        Key::Char('j') | Key::Down => Transition::to(stay(wrap_cursor(cursor, total, true))),
        Key::Char('k') | Key::Up => Transition::to(stay(wrap_cursor(cursor, total, false))),

        Key::Char('K') | Key::Char('h') | Key::Left if cursor > 0 && cursor < selected => {
            Transition::to(stay(cursor - 1))
                .with(Command::SetSelection(selection.moved_up(cursor)))
        }
        Key::Char('J') | Key::Char('l') | Key::Right if cursor + 1 < selected => {
            Transition::to(stay(cursor + 1))
                .with(Command::SetSelection(selection.moved_down(cursor)))
        }

        Key::Char(' ') => {
            let all = selection.all_columns(schema);
            match all.get(cursor) {
                Some(name) => Transition::to(stay(cursor))
                    .with(Command::SetSelection(selection.toggled(name))),
                None => Transition::to(stay(cursor)),
            }
        }

        Key::Enter | Key::Escape => Transition::to(Mode::Main),

        _ => Transition::to(stay(cursor)),
    }
}

pub(super) fn draw<T: Terminal>(term: &mut T, session: &Session<'_>, cursor: usize) -> io::Result<()> {
    let selection = session.selection();
    let columns = selection.all_columns(session.table().schema());

    term.put(0, 0, "Choose your columns: ", Attr::BOLD)?;
    draw_column_list(term, &columns, selection.len(), Some(cursor))?;

    status::draw(term, SELECT_HINT, &format!("--select={selection}"))
}

/// Draws the column picker shared by select and filter modes: selected
/// columns bold, the rest dim, the cursor highlighted.
pub(super) fn draw_column_list<T: Terminal>(
    term: &mut T,
    columns: &[String],
    selected: usize,
    cursor: Option<usize>,
) -> io::Result<()> {
    let (rows, _) = term.size();
    let visible = rows.saturating_sub(LIST_TOP + 2);
    let first = cursor.map(|c| scroll_start(c, visible)).unwrap_or(0);

    for (line, (index, name)) in columns.iter().enumerate().skip(first).take(visible).enumerate() {
        let mut attr = if index < selected { Attr::BOLD } else { Attr::DIM };
        if cursor == Some(index) {
            attr = attr | Attr::REVERSE;
        }
        term.put(LIST_TOP + line, 0, &format!(" {name:<20}"), attr)?;
    }
    Ok(())
}
