//! Filter expressions and their compilation into predicate trees.
//!
//! ## Key Types
//!
//! - `FilterExpression`: one declarative predicate node with a left-folded
//!   subfilter chain
//! - `QueryCompiler`: resolves references and compiles to a `Predicate`
//! - `Predicate` / `Clause`: the compiled form executed by the catalog
//! - `CompiledQuery`: predicate plus sort order
//!
//! The subfilter chain folds strictly left-to-right:
//! `a.and(b).or(c)` means `(a AND b) OR c`.

pub mod compile;
pub mod expr;

pub use compile::{normalize_search_text, Clause, CompiledQuery, Predicate, QueryCompiler};
pub use expr::{BoolOp, FilterExpression};
