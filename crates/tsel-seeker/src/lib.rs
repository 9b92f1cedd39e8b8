//! Row filtering and natural ordering for tsel tables.
//!
//! The seeker turns `--where` specs into [`Predicate`]s, compiles a
//! [`Filter`] against a table's schema and evaluates it to the list of
//! matching row indices.
//!
//! # Quick Start
//!
//! ```rust
//! use tsel_seeker::{Filter, Predicate};
//! use tsel_table::parse;
//!
//! let table = parse(&[
//!     "NAME  AGE  STATUS",
//!     "Alice 30   Pending",
//!     "Bob   45   Done",
//! ])
//! .unwrap();
//!
//! let filter: Filter = ["STATUS=Pending"]
//!     .iter()
//!     .map(|spec| Predicate::parse(spec).unwrap())
//!     .collect();
//!
//! let matched = filter
//!     .compile(table.schema())
//!     .unwrap()
//!     .evaluate(table.rows(), table.raw_lines());
//! assert_eq!(matched, vec![0]);
//! ```
//!
//! # Predicate Semantics
//!
//! | Operator | Meaning |
//! |----------|---------|
//! | `=` `==` | trimmed cell equals trimmed literal |
//! | `!=` `<>` | negation of the above |
//! | `<` `<=` `>` `>=` | [`natural::compare`] of cell against literal |
//! | none | literal occurs in the raw source line |
//!
//! Predicates combine with AND; an empty filter matches every row.

mod error;
mod filter;
pub mod natural;
mod op;
mod ordering;
mod predicate;

pub use error::{Result, SeekerError};
pub use filter::{distinct_values, CompiledFilter, Filter};
pub use op::Op;
pub use ordering::{CompiledOrder, Dir, OrderBy};
pub use predicate::Predicate;
