//! HELP: the key binding overlay, drawn over the main view.

use std::io;

use super::main_view;
use super::status::HELP_HINT;
use super::{Mode, Transition};
use crate::session::Session;
use crate::terminal::{Attr, Key, Terminal};

pub const HELP_SCREEN: &str = "
                   SUMMARY OF TSEL COMMANDS

  s                    Select and/or rearrange columns
  w                    Where filter - Set your filter condition
  h  ?                 Display this help.
  q                    Exit.
 ---------------------------------------------------------------------------

                           MOVING

  k  ↑                 Backward one line.
  j  ↓                 Forward one line.
  b  ^B  PageUp        Backward one window.
  f  ^F  PageDown      Forward  one window.
  u                    Backward one half-window.
  d                    Forward  one half-window.
  g  Home              First line.
  G  End               Last window.

";

const OVERLAY_TOP: usize = 5;
const OVERLAY_WIDTH: usize = 77;

/// Any key returns to the table; `q` is handled before dispatch.
pub(super) fn handle(_key: Key) -> Transition {
    Transition::to(Mode::Main)
}

pub(super) fn draw<T: Terminal>(term: &mut T, session: &Session<'_>, row_offset: usize) -> io::Result<()> {
    main_view::draw_with_hint(term, session, row_offset, HELP_HINT)?;

    let (_, cols) = term.size();
    let left = cols.saturating_sub(OVERLAY_WIDTH - 1) / 2;
    for (r, line) in HELP_SCREEN.lines().enumerate() {
        term.put(OVERLAY_TOP + r, left, &format!("{line:<width$}", width = OVERLAY_WIDTH), Attr::REVERSE)?;
    }
    Ok(())
}
