//! Catalog capability.
//!
//! The core defines the read-only `Catalog` trait; a storage collaborator
//! implements it and realizes the compiled-predicate semantics faithfully.
//! [`MemoryCatalog`](crate::catalog::MemoryCatalog) is the reference
//! implementation.

use super::card::{Card, CardId};
use super::investigator::Investigator;
use super::pack::Pack;
use crate::error::Result;
use crate::filter::CompiledQuery;

/// Read-only collection of all cards, packs, and investigators.
pub trait Catalog {
    /// Resolve a card by id. Unknown ids are `NotFound`.
    fn resolve_card(&self, id: CardId) -> Result<Card>;

    /// Execute a compiled query: every matching card, fully sorted.
    ///
    /// All-or-nothing; an unresolvable reference inside the data aborts
    /// the query instead of yielding partial results.
    fn query_cards(&self, query: &CompiledQuery) -> Result<Vec<Card>>;

    /// All known packs, in release order.
    fn packs(&self) -> Result<Vec<Pack>>;

    /// All known investigators.
    fn investigators(&self) -> Result<Vec<Investigator>>;
}
