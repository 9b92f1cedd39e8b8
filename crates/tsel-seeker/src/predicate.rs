//! Row predicates and their textual form.
//!
//! A predicate spec is either `COLUMN<op>VALUE` or free text:
//!
//! | Spec | Predicate |
//! |------|-----------|
//! | `STATUS=Pending` | `Compare { column: "STATUS", op: Eq, value: "Pending" }` |
//! | `AGE>=30` | `Compare { column: "AGE", op: Gte, value: "30" }` |
//! | `PORT<>80` | `Compare { column: "PORT", op: Diamond, value: "80" }` |
//! | `nginx` | `Substring("nginx")` |
//!
//! The text is split at the first comparator only, so the value may itself
//! contain comparator characters (`CMD=a=b` compares `CMD` with `a=b`).

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SeekerError};
use crate::op::Op;

static COMPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new("<>|<=?|>=?|!=|==?").expect("comparator pattern compiles"));

/// A single row test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches when the text occurs anywhere in the row's source line.
    Substring(String),
    /// Compares one cell against a literal.
    Compare {
        column: String,
        op: Op,
        value: String,
    },
}

impl Predicate {
    /// Creates a free-text predicate.
    pub fn substring(text: impl Into<String>) -> Self {
        Predicate::Substring(text.into())
    }

    /// Creates a column comparison.
    pub fn compare(column: impl Into<String>, op: Op, value: impl Into<String>) -> Self {
        Predicate::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// Parses a `--where` spec.
    ///
    /// # Errors
    ///
    /// [`SeekerError::InvalidPredicate`] when a comparator is present but the
    /// column name before it is empty.
    pub fn parse(spec: &str) -> Result<Self> {
        let Some(found) = COMPARATOR.find(spec) else {
            return Ok(Predicate::substring(spec));
        };

        let column = spec[..found.start()].trim();
        if column.is_empty() {
            return Err(SeekerError::InvalidPredicate(spec.to_string()));
        }
        let op = Op::from_symbol(found.as_str())
            .ok_or_else(|| SeekerError::InvalidPredicate(spec.to_string()))?;

        Ok(Predicate::compare(column, op, &spec[found.end()..]))
    }

    /// The column a comparison refers to, `None` for free text.
    pub fn column(&self) -> Option<&str> {
        match self {
            Predicate::Substring(_) => None,
            Predicate::Compare { column, .. } => Some(column),
        }
    }

    /// Returns `true` for free-text predicates.
    pub fn is_substring(&self) -> bool {
        matches!(self, Predicate::Substring(_))
    }
}

impl FromStr for Predicate {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Predicate::parse(s)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Substring(text) => f.write_str(text),
            Predicate::Compare { column, op, value } => write!(f, "{column}{op}{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_each_comparator() {
        let cases = [
            ("A=1", Op::Eq),
            ("A==1", Op::DoubleEq),
            ("A!=1", Op::Ne),
            ("A<>1", Op::Diamond),
            ("A<1", Op::Lt),
            ("A<=1", Op::Lte),
            ("A>1", Op::Gt),
            ("A>=1", Op::Gte),
        ];
        for (spec, op) in cases {
            assert_eq!(
                Predicate::parse(spec).unwrap(),
                Predicate::compare("A", op, "1"),
                "spec {spec}"
            );
        }
    }

    #[test]
    fn parse_splits_at_first_comparator() {
        assert_eq!(
            Predicate::parse("CMD=a=b").unwrap(),
            Predicate::compare("CMD", Op::Eq, "a=b")
        );
        assert_eq!(
            Predicate::parse("X<=>y").unwrap(),
            Predicate::compare("X", Op::Lte, ">y")
        );
    }

    #[test]
    fn parse_without_comparator_is_substring() {
        assert_eq!(
            Predicate::parse("nginx").unwrap(),
            Predicate::substring("nginx")
        );
        assert!(Predicate::parse("two words").unwrap().is_substring());
    }

    #[test]
    fn parse_empty_value_is_allowed() {
        assert_eq!(
            Predicate::parse("NOTE=").unwrap(),
            Predicate::compare("NOTE", Op::Eq, "")
        );
    }

    #[test]
    fn parse_rejects_missing_column() {
        assert_eq!(
            Predicate::parse("=x").unwrap_err(),
            SeekerError::InvalidPredicate("=x".into())
        );
    }

    #[test]
    fn display_reproduces_spec() {
        for spec in ["STATUS=Pending", "PORT<>80", "AGE>=30", "free text"] {
            assert_eq!(spec.parse::<Predicate>().unwrap().to_string(), spec);
        }
    }

    #[test]
    fn column_accessor() {
        assert_eq!(Predicate::compare("A", Op::Lt, "1").column(), Some("A"));
        assert_eq!(Predicate::substring("x").column(), None);
    }
}
