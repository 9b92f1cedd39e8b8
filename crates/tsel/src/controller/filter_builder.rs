//! BUILD_FILTER: pick a column, a comparator and one of the column's
//! distinct values, then commit `COL<op>VALUE` as the only predicate.

use std::io;

use tsel_seeker::{distinct_values, Op, Predicate};

use super::select::draw_column_list;
use super::status::{self, FILTER_HINT};
use super::{scroll_start, wrap_cursor, Command, Context, Mode, Transition};
use crate::session::Session;
use crate::terminal::{Attr, Key, Terminal};

const VALUE_COLUMN: usize = 21;
const LIST_TOP: usize = 2;

/// Which dropdown has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    ChoosingColumn,
    ChoosingValue,
}

/// State of the filter builder between key presses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterBuilder {
    stage: Stage,
    column_cursor: usize,
    value_cursor: usize,
    op: Op,
    /// Distinct values of the focused column, filled on entering the value
    /// dropdown.
    values: Vec<String>,
    /// Previous key, for two-key comparators such as `<=`.
    last_key: Option<Key>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn value(&self) -> Option<&str> {
        match self.stage {
            Stage::ChoosingValue => self.values.get(self.value_cursor).map(String::as_str),
            Stage::ChoosingColumn => None,
        }
    }

    /// Applies a comparator key: `!`, `<`, `>` or `=`, combined with the
    /// previous key where that forms `<=`, `>=`, `!=` or `<>`.
    fn apply_comparator(&mut self, key: Key) {
        let previous = match self.last_key {
            Some(Key::Char(c)) => Some(c),
            _ => None,
        };
        self.op = match (key, previous) {
            (Key::Char('!'), _) => Op::Ne,
            (Key::Char('<'), _) => Op::Lt,
            (Key::Char('>'), Some('<')) => Op::Diamond,
            (Key::Char('>'), _) => Op::Gt,
            (Key::Char('='), Some('<')) => Op::Lte,
            (Key::Char('='), Some('>')) => Op::Gte,
            (Key::Char('='), Some('!')) => Op::Ne,
            (Key::Char('='), _) => Op::Eq,
            _ => self.op,
        };
    }
}

fn is_comparator(key: Key) -> bool {
    matches!(key, Key::Char('!' | '<' | '>' | '='))
}

pub(super) fn handle(mut builder: FilterBuilder, key: Key, ctx: &Context<'_, '_>) -> Transition {
    if is_comparator(key) {
        builder.apply_comparator(key);
    }
    builder.last_key = Some(key);

    let schema = ctx.session.table().schema();
    let columns = ctx.session.selection().all_columns(schema);

    match (builder.stage, key) {
        (_, Key::Escape) => return Transition::to(Mode::Main),

        (Stage::ChoosingColumn, Key::Char('j') | Key::Down) => {
            builder.column_cursor = wrap_cursor(builder.column_cursor, columns.len(), true);
        }
        (Stage::ChoosingColumn, Key::Char('k') | Key::Up) => {
            builder.column_cursor = wrap_cursor(builder.column_cursor, columns.len(), false);
        }
        (Stage::ChoosingColumn, Key::Char('l') | Key::Right) => {
            if let Some(index) = columns
                .get(builder.column_cursor)
                .and_then(|name| schema.index_of(name))
            {
                builder.values = distinct_values(ctx.session.table().rows(), index);
                builder.value_cursor = 0;
                builder.stage = Stage::ChoosingValue;
            }
        }

        (Stage::ChoosingValue, Key::Char('j') | Key::Down) => {
            builder.value_cursor = wrap_cursor(builder.value_cursor, builder.values.len(), true);
        }
        (Stage::ChoosingValue, Key::Char('k') | Key::Up) => {
            builder.value_cursor = wrap_cursor(builder.value_cursor, builder.values.len(), false);
        }
        (Stage::ChoosingValue, Key::Char('h') | Key::Left) => {
            builder.stage = Stage::ChoosingColumn;
        }
        (Stage::ChoosingValue, Key::Enter) => {
            let column = columns.get(builder.column_cursor);
            if let (Some(column), Some(value)) = (column, builder.value()) {
                let predicate = Predicate::compare(column.as_str(), builder.op, value);
                return Transition::to(Mode::Main)
                    .with(Command::SetPredicates(vec![predicate]));
            }
        }

        _ => {}
    }
    Transition::to(Mode::BuildFilter(builder))
}

pub(super) fn draw<T: Terminal>(
    term: &mut T,
    session: &Session<'_>,
    builder: &FilterBuilder,
) -> io::Result<()> {
    let selection = session.selection();
    let columns = selection.all_columns(session.table().schema());

    let title = match builder.stage {
        Stage::ChoosingColumn => "Choose a column: ",
        Stage::ChoosingValue => "Choose a value: ",
    };
    term.put(0, 0, title, Attr::BOLD)?;
    draw_column_list(term, &columns, selection.len(), Some(builder.column_cursor))?;

    if builder.stage == Stage::ChoosingValue {
        let (rows, _) = term.size();
        let visible = rows.saturating_sub(LIST_TOP + 2);
        let first = scroll_start(builder.value_cursor, visible);
        for (line, (index, value)) in builder
            .values
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .enumerate()
        {
            let attr = if index == builder.value_cursor {
                Attr::REVERSE
            } else {
                Attr::NORMAL
            };
            term.put(LIST_TOP + line, VALUE_COLUMN, &format!("{value:<20}"), attr)?;
        }
    }

    let column = columns
        .get(builder.column_cursor)
        .map(String::as_str)
        .unwrap_or_default();
    let message = format!(
        "--where='{column}{}{}'",
        builder.op,
        builder.value().unwrap_or_default()
    );
    status::draw(term, FILTER_HINT, &message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MockTerminal;
    use tsel_table::{parse, Table};

    fn pods() -> Table {
        parse(&[
            "NAME   STATUS    RESTARTS",
            "web-1  Running   0",
            "web-2  Pending   12",
            "db-1   Running   3",
        ])
        .unwrap()
    }

    /// Feeds `keys` starting from a fresh builder; returns the last transition.
    fn feed(session: &Session<'_>, keys: &[Key]) -> Transition {
        let ctx = Context {
            session,
            row_offset: 0,
            window_height: 10,
        };
        let mut transition = Transition::to(Mode::BuildFilter(FilterBuilder::new()));
        for &key in keys {
            match transition.mode {
                Mode::BuildFilter(builder) => transition = handle(builder, key, &ctx),
                _ => break,
            }
        }
        transition
    }

    fn builder_of(t: Transition) -> FilterBuilder {
        match t.mode {
            Mode::BuildFilter(builder) => builder,
            other => panic!("expected filter mode, got {other:?}"),
        }
    }

    fn op_after(keys: &str) -> Op {
        let table = pods();
        let session = Session::new(&table, "ALL", Vec::new(), None).unwrap();
        let keys: Vec<Key> = keys.chars().map(Key::Char).collect();
        builder_of(feed(&session, &keys)).op()
    }

    #[test]
    fn comparator_keys() {
        assert_eq!(op_after(""), Op::Eq);
        assert_eq!(op_after("!"), Op::Ne);
        assert_eq!(op_after("<"), Op::Lt);
        assert_eq!(op_after(">"), Op::Gt);
        assert_eq!(op_after("<>"), Op::Diamond);
        assert_eq!(op_after("<="), Op::Lte);
        assert_eq!(op_after(">="), Op::Gte);
        assert_eq!(op_after("!="), Op::Ne);
        assert_eq!(op_after("<j="), Op::Eq);
        assert_eq!(op_after("<j>"), Op::Gt);
    }

    #[test]
    fn descending_lists_distinct_values() {
        let table = pods();
        let session = Session::new(&table, "ALL", Vec::new(), None).unwrap();
        let builder = builder_of(feed(&session, &[Key::Down, Key::Char('l')]));

        assert_eq!(builder.stage(), Stage::ChoosingValue);
        assert_eq!(builder.values(), &["Pending", "Running"]);
        assert_eq!(builder.value_cursor, 0);
    }

    #[test]
    fn value_cursor_resets_on_descend() {
        let table = pods();
        let session = Session::new(&table, "ALL", Vec::new(), None).unwrap();
        let builder = builder_of(feed(
            &session,
            &[Key::Char('l'), Key::Char('j'), Key::Char('h'), Key::Char('j'), Key::Right],
        ));
        assert_eq!(builder.column_cursor, 1);
        assert_eq!(builder.value_cursor, 0);
    }

    #[test]
    fn enter_commits_single_predicate() {
        let table = pods();
        let session = Session::new(&table, "ALL", vec![Predicate::substring("web")], None).unwrap();
        let t = feed(
            &session,
            &[Key::Char('j'), Key::Char('!'), Key::Char('l'), Key::Char('j'), Key::Enter],
        );
        assert_eq!(t.mode, Mode::Main);
        assert_eq!(
            t.command,
            Command::SetPredicates(vec![Predicate::compare("STATUS", Op::Ne, "Running")])
        );
    }

    #[test]
    fn enter_on_column_is_ignored() {
        let table = pods();
        let session = Session::new(&table, "ALL", Vec::new(), None).unwrap();
        let t = feed(&session, &[Key::Enter]);
        assert!(matches!(t.mode, Mode::BuildFilter(_)));
        assert_eq!(t.command, Command::None);
    }

    #[test]
    fn escape_cancels_from_either_stage() {
        let table = pods();
        let session = Session::new(&table, "ALL", Vec::new(), None).unwrap();
        assert_eq!(feed(&session, &[Key::Escape]), Transition::to(Mode::Main));
        assert_eq!(
            feed(&session, &[Key::Char('l'), Key::Escape]),
            Transition::to(Mode::Main)
        );
    }

    #[test]
    fn draws_value_dropdown_and_preview() {
        let table = pods();
        let session = Session::new(&table, "NAME,STATUS", Vec::new(), None).unwrap();
        let builder = builder_of(feed(
            &session,
            &[Key::Char('j'), Key::Char('l'), Key::Char('j')],
        ));

        let mut term = MockTerminal::new(10, 60);
        draw(&mut term, &session, &builder).unwrap();

        assert_eq!(term.line(0), "Choose a value:");
        assert_eq!(term.line(2), " NAME                Pending");
        assert_eq!(term.line(3), " STATUS              Running");
        assert_eq!(term.attr_at(3, VALUE_COLUMN), Attr::REVERSE);
        assert_eq!(term.attr_at(4, 1), Attr::DIM);
        assert_eq!(term.line(9), "--where='STATUS=Running'");
    }
}
