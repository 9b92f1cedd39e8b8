//! Comparison operators for predicates.
//!
//! The [`Op`] enum covers the six comparisons a `--where` spec can express,
//! plus the two spelling aliases `==` and `<>`. Aliases are kept as distinct
//! variants so a predicate prints back exactly as it was typed.

use std::cmp::Ordering;

use crate::natural;

/// Comparison operator for a column predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Op {
    /// `=`: trimmed string equality.
    #[default]
    Eq,
    /// `==`: alias for `Eq`.
    DoubleEq,
    /// `!=`: trimmed string inequality.
    Ne,
    /// `<>`: alias for `Ne`.
    Diamond,
    /// `<`: natural ordering.
    Lt,
    /// `<=`: natural ordering.
    Lte,
    /// `>`: natural ordering.
    Gt,
    /// `>=`: natural ordering.
    Gte,
}

impl Op {
    /// Every operator, in the order the symbols are tried by the spec parser.
    pub const ALL: [Op; 8] = [
        Op::Diamond,
        Op::Lte,
        Op::Lt,
        Op::Gte,
        Op::Gt,
        Op::Ne,
        Op::DoubleEq,
        Op::Eq,
    ];

    /// Parses an operator symbol.
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.as_str() == symbol)
    }

    /// Normalizes spelling aliases to their canonical form.
    ///
    /// - `DoubleEq` -> `Eq`
    /// - `Diamond` -> `Ne`
    /// - Others unchanged
    pub fn normalize(self) -> Op {
        match self {
            Op::DoubleEq => Op::Eq,
            Op::Diamond => Op::Ne,
            other => other,
        }
    }

    /// Returns `true` for the four ordering operators.
    pub fn is_ordering(self) -> bool {
        matches!(self, Op::Lt | Op::Lte | Op::Gt | Op::Gte)
    }

    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self.normalize() {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Tests a cell against a literal.
    ///
    /// Equality operators compare trimmed strings; ordering operators use the
    /// natural comparator with the cell on the left.
    pub fn matches(self, cell: &str, literal: &str) -> bool {
        match self.normalize() {
            Op::Eq => cell.trim() == literal.trim(),
            Op::Ne => cell.trim() != literal.trim(),
            op => op.eval_ordering(natural::compare(cell, literal)),
        }
    }

    /// Returns the symbol of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::DoubleEq => "==",
            Op::Ne => "!=",
            Op::Diamond => "<>",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Gt => ">",
            Op::Gte => ">=",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Op::ALL {
            assert_eq!(Op::from_symbol(op.as_str()), Some(op));
        }
        assert_eq!(Op::from_symbol("=>"), None);
        assert_eq!(Op::from_symbol(""), None);
    }

    #[test]
    fn normalize_aliases() {
        assert_eq!(Op::DoubleEq.normalize(), Op::Eq);
        assert_eq!(Op::Diamond.normalize(), Op::Ne);
        assert_eq!(Op::Lte.normalize(), Op::Lte);
    }

    #[test]
    fn eval_ordering_truth_table() {
        use Ordering::*;
        assert!(Op::Lt.eval_ordering(Less));
        assert!(!Op::Lt.eval_ordering(Equal));
        assert!(Op::Lte.eval_ordering(Equal));
        assert!(!Op::Lte.eval_ordering(Greater));
        assert!(Op::Gt.eval_ordering(Greater));
        assert!(Op::Gte.eval_ordering(Equal));
        assert!(!Op::Gte.eval_ordering(Less));
        assert!(Op::Diamond.eval_ordering(Less));
        assert!(Op::DoubleEq.eval_ordering(Equal));
    }

    #[test]
    fn equality_trims_both_sides() {
        assert!(Op::Eq.matches("  Pending ", "Pending"));
        assert!(Op::DoubleEq.matches("Pending", " Pending"));
        assert!(!Op::Ne.matches("Done", "Done  "));
        assert!(Op::Diamond.matches("Done", "Pending"));
    }

    #[test]
    fn equality_is_textual() {
        // "007" and "7" order equal naturally but are different strings.
        assert!(!Op::Eq.matches("007", "7"));
        assert!(Op::Gte.matches("007", "7"));
        assert!(Op::Lte.matches("007", "7"));
    }

    #[test]
    fn ordering_is_natural() {
        assert!(Op::Lt.matches("item2", "item10"));
        assert!(Op::Gt.matches("45", "30"));
        assert!(!Op::Gt.matches("9", "10"));
    }

    #[test]
    fn display() {
        assert_eq!(Op::Diamond.to_string(), "<>");
        assert_eq!(Op::default(), Op::Eq);
    }
}
