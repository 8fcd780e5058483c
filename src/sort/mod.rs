//! Sorting and sectioning of query results.
//!
//! ## Key Types
//!
//! - `SortSpec`: ordered `(column, direction)` list compared
//!   lexicographically
//! - `ResultSectioner`: splits a sorted sequence into labeled contiguous
//!   sections by the first sort column

pub mod section;
pub mod spec;

pub use section::{ResultSectioner, Section};
pub use spec::{SortColumn, SortDirection, SortSpec};
