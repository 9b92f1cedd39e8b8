//! Rebuilds the command line equivalent to an interactive session.
//!
//! ```text
//! tsel --select='NAME,AGE' --where='nginx' --where='STATUS=Pending' --order-by='-AGE'
//! ```

use tsel_seeker::{OrderBy, Predicate};

use crate::selection::Selection;

/// Formats the `tsel` invocation reproducing the given state.
///
/// An empty selection is omitted; predicates appear in evaluation order.
pub fn reconstruct(
    selection: &Selection,
    predicates: &[Predicate],
    order_by: Option<&OrderBy>,
) -> String {
    let mut command = vec!["tsel".to_string()];

    if !selection.is_empty() {
        command.push(format!("--select={}", quote(&selection.to_string())));
    }
    for predicate in predicates {
        command.push(format!("--where={}", quote(&predicate.to_string())));
    }
    if let Some(order_by) = order_by {
        command.push(format!("--order-by={}", quote(&order_by.to_string())));
    }

    command.join(" ")
}

/// Wraps `value` in single quotes, escaping embedded ones for POSIX shells.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
