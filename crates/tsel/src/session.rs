//! The state shared by batch and interactive runs: table, selection,
//! predicates, ordering and the filtered row set derived from them.

use tracing::debug;
use tsel_seeker::{CompiledOrder, Filter, OrderBy, Predicate, SeekerError};
use tsel_table::{Column, Row, Table};

use crate::selection::Selection;

#[derive(Debug)]
pub struct Session<'t> {
    table: &'t Table,
    selection: Selection,
    predicates: Vec<Predicate>,
    order_by: Option<OrderBy>,
    order: Option<CompiledOrder>,
    filtered: Vec<usize>,
}

impl<'t> Session<'t> {
    /// Validates every column reference and computes the initial row set.
    ///
    /// # Errors
    ///
    /// [`SeekerError::UnknownColumn`] if the selection, a predicate or the
    /// ordering names a column the table lacks.
    pub fn new(
        table: &'t Table,
        select: &str,
        predicates: Vec<Predicate>,
        order_by: Option<OrderBy>,
    ) -> Result<Self, SeekerError> {
        let selection = Selection::parse(select, table.schema())?;
        let order = order_by
            .as_ref()
            .map(|o| o.compile(table.schema()))
            .transpose()?;

        let mut session = Self {
            table,
            selection,
            predicates,
            order_by,
            order,
            filtered: Vec::new(),
        };
        session.refilter()?;
        Ok(session)
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn order_by(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    /// Number of rows passing the current predicates.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Rows passing the current predicates, in output order.
    pub fn filtered_rows(&self) -> Vec<&'t Row> {
        let rows = self.table.rows();
        self.filtered.iter().map(|&i| &rows[i]).collect()
    }

    /// Columns to draw, in selection order.
    pub fn columns(&self) -> Vec<&'t Column> {
        self.selection.resolve(self.table.schema())
    }

    pub fn set_selection(&mut self, selection: Selection) {
        debug!(selection = %selection, "selection changed");
        self.selection = selection;
    }

    /// Replaces the predicate list and recomputes the row set.
    ///
    /// A list naming an unknown column is rejected and the session is left
    /// unchanged.
    pub fn set_predicates(&mut self, predicates: Vec<Predicate>) -> Result<(), SeekerError> {
        self.filtered = self.evaluate(&predicates)?;
        self.predicates = predicates;
        Ok(())
    }

    fn refilter(&mut self) -> Result<(), SeekerError> {
        self.filtered = self.evaluate(&self.predicates)?;
        Ok(())
    }

    /// Indices of the rows passing `predicates`, in output order.
    fn evaluate(&self, predicates: &[Predicate]) -> Result<Vec<usize>, SeekerError> {
        let filter = Filter::from(predicates.to_vec());
        let mut filtered = filter
            .compile(self.table.schema())?
            .evaluate(self.table.rows(), self.table.raw_lines());
        if let Some(order) = &self.order {
            order.sort(self.table.rows(), &mut filtered);
        }
        Ok(filtered)
    }
}
