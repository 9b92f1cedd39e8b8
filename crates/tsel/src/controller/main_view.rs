//! MAIN: the scrolling table.

use std::io;

use tracing::debug;
use tsel_render::{render_to_string, Window};

use super::status::{self, MAIN_HINT};
use super::{Command, Context, FilterBuilder, Mode, Transition, RESERVED_ROWS};
use crate::session::Session;
use crate::terminal::{Attr, Key, Terminal};

pub(super) fn handle(key: Key, ctx: &Context<'_, '_>) -> Transition {
    let count = ctx.session.filtered_count();
    let offset = ctx.row_offset;
    let page = ctx.window_height;
    let half = page / 2;

    let down = |n: usize| Command::ScrollTo(offset.saturating_add(n).min(count));
    let up = |n: usize| Command::ScrollTo(offset.saturating_sub(n));

    let command = match key {
        Key::Char('s') => return Transition::to(Mode::SelectColumns { cursor: 0 }),
        Key::Char('w') => return Transition::to(Mode::BuildFilter(FilterBuilder::new())),
        Key::Char('h') | Key::Char('?') => return Transition::to(Mode::Help),

        Key::Char('j') | Key::Down => down(1),
        Key::Char('k') | Key::Up => up(1),
        Key::Char('d') => down(half),
        Key::Char('u') => up(half),
        Key::Char('f') | Key::Ctrl('f') | Key::PageDown => down(page),
        Key::Char('b') | Key::Ctrl('b') | Key::PageUp => up(page),
        Key::Char('g') | Key::Home => Command::ScrollTo(0),
        Key::Char('G') | Key::End => Command::ScrollTo(count.saturating_sub(page)),

        other => {
            debug!(key = ?other, "unbound key in main view");
            Command::None
        }
    };
    Transition::to(Mode::Main).with(command)
}

/// The table window for a `(rows, cols)` screen. The last column is left
/// empty.
pub(super) fn window(size: (usize, usize), row_offset: usize) -> Window {
    let (rows, cols) = size;
    Window::new(row_offset, rows.saturating_sub(RESERVED_ROWS), cols.saturating_sub(1))
}

/// Draws the table window and the status bar.
pub(super) fn draw<T: Terminal>(term: &mut T, session: &Session<'_>, row_offset: usize) -> io::Result<()> {
    draw_with_hint(term, session, row_offset, MAIN_HINT)
}

pub(super) fn draw_with_hint<T: Terminal>(
    term: &mut T,
    session: &Session<'_>,
    row_offset: usize,
    hint: &str,
) -> io::Result<()> {
    let window = window(term.size(), row_offset);

    let columns = session.columns();
    let filtered = session.filtered_rows();
    let text = render_to_string(&columns, &filtered, &window);
    for (i, line) in text.lines().enumerate() {
        let attr = if i == 0 { Attr::BOLD } else { Attr::NORMAL };
        term.put(i, 0, line, attr)?;
    }

    let message = status::position(&window, session);
    status::draw(term, hint, &message)
}
