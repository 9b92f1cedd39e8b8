//! Terminal abstraction for the interactive controller.
//!
//! The controller only ever talks to a [`Terminal`]: it asks for the size,
//! clears, puts styled text at a position, flushes and blocks on the next
//! key. [`ConsoleTerminal`] drives a real terminal through `console`;
//! [`MockTerminal`] keeps an in-memory screen and replays scripted keys so
//! whole sessions can be tested without a TTY.

use std::collections::VecDeque;
use std::io;
use std::ops::BitOr;

use console::{Style, Term};
use tsel_render::clip_to_width;

const ENTER_ALTERNATE_SCREEN: &str = "\x1b[?1049h";
const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Escape,
    /// A printable character, space included.
    Char(char),
    /// A control chord, e.g. `Ctrl('b')` for Ctrl-B.
    Ctrl(char),
    /// Anything else (function keys, unknown escape sequences).
    Other,
}

impl Key {
    /// Maps a raw control character (`\x01`..=`\x1a`) to its chord.
    fn from_control(c: char) -> Option<Key> {
        let code = c as u32;
        if (1..=26).contains(&code) {
            char::from_u32(code + u32::from(b'a') - 1).map(Key::Ctrl)
        } else {
            None
        }
    }
}

impl From<console::Key> for Key {
    fn from(key: console::Key) -> Self {
        match key {
            console::Key::ArrowUp => Key::Up,
            console::Key::ArrowDown => Key::Down,
            console::Key::ArrowLeft => Key::Left,
            console::Key::ArrowRight => Key::Right,
            console::Key::PageUp => Key::PageUp,
            console::Key::PageDown => Key::PageDown,
            console::Key::Home => Key::Home,
            console::Key::End => Key::End,
            console::Key::Enter => Key::Enter,
            console::Key::Escape => Key::Escape,
            console::Key::CtrlC => Key::Ctrl('c'),
            console::Key::Char(c) if c.is_control() => Key::from_control(c).unwrap_or(Key::Other),
            console::Key::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

/// Text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attr {
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl Attr {
    pub const NORMAL: Attr = Attr {
        bold: false,
        dim: false,
        reverse: false,
    };
    pub const BOLD: Attr = Attr {
        bold: true,
        ..Attr::NORMAL
    };
    pub const DIM: Attr = Attr {
        dim: true,
        ..Attr::NORMAL
    };
    /// Highlight, used for the status hints and cursors.
    pub const REVERSE: Attr = Attr {
        reverse: true,
        ..Attr::NORMAL
    };

    fn style(self) -> Style {
        let mut style = Style::new().force_styling(true);
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dim();
        }
        if self.reverse {
            style = style.reverse();
        }
        style
    }
}

impl BitOr for Attr {
    type Output = Attr;

    fn bitor(self, rhs: Attr) -> Attr {
        Attr {
            bold: self.bold || rhs.bold,
            dim: self.dim || rhs.dim,
            reverse: self.reverse || rhs.reverse,
        }
    }
}

/// The terminal capabilities the controller needs.
pub trait Terminal {
    /// Current size as `(rows, cols)`.
    fn size(&self) -> (usize, usize);

    /// Blanks the whole screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Writes `text` at `(row, col)`. Text past the right edge is dropped.
    fn put(&mut self, row: usize, col: usize, text: &str, attr: Attr) -> io::Result<()>;

    /// Makes everything written since the last flush visible.
    fn flush(&mut self) -> io::Result<()>;

    /// Blocks until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// A real terminal: draws on stderr's alternate screen, reads keys from the
/// controlling TTY.
///
/// Drawing on stderr keeps stdout free for the command line printed on exit.
/// The alternate screen and cursor are restored on drop.
#[derive(Debug)]
pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    /// Switches stderr to the alternate screen and hides the cursor.
    pub fn open() -> io::Result<Self> {
        Self::on(Term::buffered_stderr())
    }

    /// Takes over `term`.
    ///
    /// Fails with [`io::ErrorKind::Unsupported`] when `term` is not attached
    /// to a terminal: key reads would return immediately instead of blocking.
    pub fn on(term: Term) -> io::Result<Self> {
        if !term.is_term() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "interactive mode needs stderr attached to a terminal",
            ));
        }
        term.write_str(ENTER_ALTERNATE_SCREEN)?;
        term.hide_cursor()?;
        term.flush()?;
        Ok(Self { term })
    }
}

impl Drop for ConsoleTerminal {
    fn drop(&mut self) {
        let _ = self.term.show_cursor();
        let _ = self.term.write_str(LEAVE_ALTERNATE_SCREEN);
        let _ = self.term.flush();
    }
}

impl Terminal for ConsoleTerminal {
    fn size(&self) -> (usize, usize) {
        let (rows, cols) = self.term.size();
        (usize::from(rows), usize::from(cols))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.term.clear_screen()
    }

    fn put(&mut self, row: usize, col: usize, text: &str, attr: Attr) -> io::Result<()> {
        let (rows, cols) = self.size();
        if row >= rows || col >= cols {
            return Ok(());
        }
        // Writing the bottom-right cell scrolls some terminals.
        let room = if row + 1 == rows { cols - col - 1 } else { cols - col };
        self.term.move_cursor_to(col, row)?;
        self.term
            .write_str(&attr.style().apply_to(clip_to_width(text, room)).to_string())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.term.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.term.read_key().map(Key::from)
    }
}

/// In-memory terminal for tests.
///
/// Every cell holds one `char` and its [`Attr`]. Keys are replayed in order;
/// once the script runs out, [`Terminal::read_key`] fails with
/// [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug, Clone)]
pub struct MockTerminal {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<(char, Attr)>>,
    keys: VecDeque<Key>,
    frames: Vec<String>,
}

impl MockTerminal {
    /// Creates a blank `rows` x `cols` screen with no scripted keys.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![(' ', Attr::NORMAL); cols]; rows],
            keys: VecDeque::new(),
            frames: Vec::new(),
        }
    }

    /// Appends keys to the script.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Appends one `Key::Char` per character of `typed`.
    pub fn typing(self, typed: &str) -> Self {
        self.with_keys(typed.chars().map(Key::Char))
    }

    /// The current screen, one line per row, trailing spaces removed.
    pub fn screen(&self) -> String {
        (0..self.rows)
            .map(|row| self.line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One row of the current screen, trailing spaces removed.
    pub fn line(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| cells.iter().map(|(c, _)| *c).collect::<String>())
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// Attribute of the cell at `(row, col)`.
    pub fn attr_at(&self, row: usize, col: usize) -> Attr {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(|(_, attr)| *attr)
            .unwrap_or_default()
    }

    /// Every screen made visible by a flush, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Number of keys not yet consumed.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Terminal for MockTerminal {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.cells {
            row.fill((' ', Attr::NORMAL));
        }
        Ok(())
    }

    fn put(&mut self, row: usize, col: usize, text: &str, attr: Attr) -> io::Result<()> {
        let Some(cells) = self.cells.get_mut(row) else {
            return Ok(());
        };
        for (cell, c) in cells.iter_mut().skip(col).zip(text.chars()) {
            *cell = (c, attr);
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let screen = self.screen();
        self.frames.push(screen);
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}
