//! tsel: filter, sort and browse whitespace-aligned or CSV tables.
//!
//! The binary wires these modules together:
//!
//! - [`cli`] parses arguments into [`cli::Options`].
//! - [`logging`] installs the tracing subscriber.
//! - [`session`] holds the table, column selection, predicates and ordering.
//! - [`controller`] is the interactive modal loop, drawing through a
//!   [`terminal::Terminal`].
//! - [`command_line`] prints the equivalent invocation after a session.
//! - [`app`] runs one of the batch or interactive paths.
//!
//! Table parsing, filtering and rendering live in the `tsel-table`,
//! `tsel-seeker` and `tsel-render` crates.

pub mod app;
pub mod cli;
pub mod command_line;
pub mod controller;
pub mod logging;
pub mod selection;
pub mod session;
pub mod terminal;

pub use cli::{Cli, Options, OutputFormat};
pub use controller::{Controller, Mode};
pub use selection::Selection;
pub use session::Session;
pub use terminal::{Attr, ConsoleTerminal, Key, MockTerminal, Terminal};
