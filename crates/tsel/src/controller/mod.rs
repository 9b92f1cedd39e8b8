//! The interactive controller: a modal state machine over a [`Session`].
//!
//! ```text
//!            s                     w
//!   SELECT <---- MAIN ----> BUILD_FILTER (column <-> value)
//!     |  Enter/Esc ^  ^  Enter/Esc  |
//!     +------------+  +-------------+
//!                  |
//!            h/? v ^ any key
//!                 HELP            q from anywhere: QUIT
//! ```
//!
//! Each mode handler is a pure function from `(mode, key, context)` to a
//! [`Transition`]: the next mode plus at most one [`Command`] for the event
//! loop to apply. Only the loop mutates the session, the scroll offset or
//! the screen.

mod filter_builder;
mod help;
mod main_view;
mod select;
mod status;

use std::io;

use anyhow::{Context as _, Result};
use tracing::debug;
use tsel_seeker::Predicate;

use crate::selection::Selection;
use crate::session::Session;
use crate::terminal::{Key, Terminal};

pub use filter_builder::{FilterBuilder, Stage};
pub use help::HELP_SCREEN;

/// Rows reserved below the table body: header line plus two status lines.
pub const RESERVED_ROWS: usize = 3;

/// Controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling the filtered table.
    Main,
    /// Choosing and reordering displayed columns.
    SelectColumns { cursor: usize },
    /// Building a `COL<op>VALUE` predicate.
    BuildFilter(FilterBuilder),
    /// Key binding overlay.
    Help,
    /// Terminal state; the loop exits.
    Quit,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Main => "main",
            Mode::SelectColumns { .. } => "select",
            Mode::BuildFilter(builder) => match builder.stage() {
                Stage::ChoosingColumn => "filter/column",
                Stage::ChoosingValue => "filter/value",
            },
            Mode::Help => "help",
            Mode::Quit => "quit",
        }
    }
}

/// A state change requested by a mode handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    /// Move the first visible row. Already clamped by the handler.
    ScrollTo(usize),
    /// Replace the displayed columns.
    SetSelection(Selection),
    /// Replace the predicate list and refilter.
    SetPredicates(Vec<Predicate>),
}

/// The result of handling one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub mode: Mode,
    pub command: Command,
}

impl Transition {
    pub fn to(mode: Mode) -> Self {
        Self {
            mode,
            command: Command::None,
        }
    }

    pub fn with(mut self, command: Command) -> Self {
        self.command = command;
        self
    }
}

/// Read-only view handed to mode handlers.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a, 't> {
    pub session: &'a Session<'t>,
    pub row_offset: usize,
    /// Number of table rows that fit on screen.
    pub window_height: usize,
}

/// Dispatches `key` to the handler for `mode`.
///
/// `q` quits from every mode.
pub fn transition(mode: Mode, key: Key, ctx: &Context<'_, '_>) -> Transition {
    if key == Key::Char('q') {
        return Transition::to(Mode::Quit);
    }
    match mode {
        Mode::Main => main_view::handle(key, ctx),
        Mode::SelectColumns { cursor } => select::handle(cursor, key, ctx),
        Mode::BuildFilter(builder) => filter_builder::handle(builder, key, ctx),
        Mode::Help => help::handle(key),
        Mode::Quit => Transition::to(Mode::Quit),
    }
}

/// Owns the terminal and session and runs the event loop.
pub struct Controller<'t, T: Terminal> {
    terminal: T,
    session: Session<'t>,
    mode: Mode,
    row_offset: usize,
}

impl<'t, T: Terminal> Controller<'t, T> {
    pub fn new(terminal: T, session: Session<'t>) -> Self {
        Self {
            terminal,
            session,
            mode: Mode::Main,
            row_offset: 0,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub fn session(&self) -> &Session<'t> {
        &self.session
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Hands back the terminal and the final session.
    pub fn into_parts(self) -> (T, Session<'t>) {
        (self.terminal, self.session)
    }

    /// Draws, reads a key, applies the transition; until QUIT.
    pub fn run(&mut self) -> Result<()> {
        while self.mode != Mode::Quit {
            self.draw().context("failed to draw screen")?;
            let key = self.terminal.read_key().context("failed to read key")?;
            self.step(key)?;
        }
        Ok(())
    }

    /// Handles a single key.
    pub fn step(&mut self, key: Key) -> Result<()> {
        let (rows, _) = self.terminal.size();
        let ctx = Context {
            session: &self.session,
            row_offset: self.row_offset,
            window_height: rows.saturating_sub(RESERVED_ROWS),
        };
        let mode = std::mem::replace(&mut self.mode, Mode::Main);
        let from = mode.name();
        let Transition { mode, command } = transition(mode, key, &ctx);
        debug!(?key, from, to = mode.name(), ?command, "key handled");

        self.mode = mode;
        self.apply(command)
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::None => {}
            Command::ScrollTo(offset) => {
                self.row_offset = offset.min(self.session.filtered_count());
            }
            Command::SetSelection(selection) => self.session.set_selection(selection),
            Command::SetPredicates(predicates) => {
                self.session.set_predicates(predicates)?;
                self.row_offset = self.row_offset.min(self.session.filtered_count());
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        self.terminal.clear()?;
        match &self.mode {
            Mode::Main | Mode::Quit => {
                main_view::draw(&mut self.terminal, &self.session, self.row_offset)?
            }
            Mode::SelectColumns { cursor } => {
                select::draw(&mut self.terminal, &self.session, *cursor)?
            }
            Mode::BuildFilter(builder) => {
                filter_builder::draw(&mut self.terminal, &self.session, builder)?
            }
            Mode::Help => help::draw(&mut self.terminal, &self.session, self.row_offset)?,
        }
        self.terminal.flush()
    }
}

/// Moves `cursor` by one step forward or back, wrapping over `len` entries.
///
/// An empty list keeps the cursor at 0.
pub(crate) fn wrap_cursor(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}

/// Index of the first entry to draw so `cursor` stays within `visible` rows.
pub(crate) fn scroll_start(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_cursor_cycles() {
        assert_eq!(wrap_cursor(2, 3, true), 0);
        assert_eq!(wrap_cursor(0, 3, false), 2);
        assert_eq!(wrap_cursor(1, 3, false), 0);
        assert_eq!(wrap_cursor(5, 0, true), 0);
        assert_eq!(wrap_cursor(0, 0, false), 0);
    }

    #[test]
    fn scroll_start_keeps_cursor_visible() {
        assert_eq!(scroll_start(0, 5), 0);
        assert_eq!(scroll_start(4, 5), 0);
        assert_eq!(scroll_start(7, 5), 3);
    }

    #[test]
    fn mode_names() {
        assert_eq!(Mode::Main.name(), "main");
        assert_eq!(Mode::SelectColumns { cursor: 3 }.name(), "select");
        assert_eq!(Mode::BuildFilter(FilterBuilder::new()).name(), "filter/column");
    }
}
