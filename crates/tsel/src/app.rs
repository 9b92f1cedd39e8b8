//! Top-level run: load, filter, then print or browse.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::debug;
use tsel_render::{render_to_string, write_csv, write_json, Window};
use tsel_table::{load, RealStdin, StdinReader, Table};

use crate::cli::{Options, OutputFormat};
use crate::command_line::reconstruct;
use crate::controller::Controller;
use crate::session::Session;
use crate::terminal::{ConsoleTerminal, Terminal};

/// Runs tsel against the real stdin, stdout and terminal.
pub fn run(options: &Options) -> Result<()> {
    let table = load_table(options, &RealStdin)?;
    let session = session(&table, options)?;

    if options.interactive {
        let terminal = ConsoleTerminal::open().context("failed to open terminal")?;
        let command = browse(terminal, session)?;
        println!("{command}");
        return Ok(());
    }

    let stdout = io::stdout().lock();
    write_output(&session, options.format, BufWriter::new(stdout))
}

pub fn load_table(options: &Options, stdin: &dyn StdinReader) -> Result<Table> {
    load(&options.source, stdin)
        .with_context(|| format!("failed to read table from {}", options.source.describe()))
}

/// Builds the session, rejecting unknown column names up front.
pub fn session<'t>(table: &'t Table, options: &Options) -> Result<Session<'t>> {
    let session = Session::new(
        table,
        &options.select,
        options.predicates.clone(),
        options.order_by.clone(),
    )?;
    debug!(
        rows = session.filtered_count(),
        of = table.row_count(),
        "initial filter"
    );
    Ok(session)
}

/// Runs the interactive controller until quit and returns the equivalent
/// command line.
///
/// The terminal is released before returning so the caller can print to
/// the normal screen.
pub fn browse<T: Terminal>(terminal: T, session: Session<'_>) -> Result<String> {
    let mut controller = Controller::new(terminal, session);
    controller.run()?;

    let (terminal, session) = controller.into_parts();
    drop(terminal);
    Ok(reconstruct(
        session.selection(),
        session.predicates(),
        session.order_by(),
    ))
}

/// Writes the filtered rows of the selected columns in `format`.
pub fn write_output<W: Write>(session: &Session<'_>, format: OutputFormat, mut out: W) -> Result<()> {
    let columns = session.columns();
    let rows = session.filtered_rows();

    match format {
        OutputFormat::Table => {
            let text = render_to_string(&columns, &rows, &Window::unbounded());
            out.write_all(text.as_bytes())?;
        }
        OutputFormat::Csv => write_csv(&mut out, &columns, &rows)?,
        OutputFormat::Json => write_json(&mut out, &columns, &rows)?,
    }
    out.flush().context("failed to write output")
}
