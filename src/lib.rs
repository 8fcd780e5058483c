//! # cardex
//!
//! Query and deck-consistency core for a card-game reference application.
//!
//! ## Design Principles
//!
//! 1. **Library Core**: No UI, storage, or network code. The core consumes
//!    a read-only [`Catalog`] capability and a [`DeckPersistence`]
//!    capability and exchanges plain value objects with them.
//!
//! 2. **All-Or-Nothing**: A query returns a fully resolved, fully sorted
//!    result or a typed error; a deck mutation fully commits or is
//!    rejected. Nothing retries and nothing returns partial results.
//!
//! 3. **Explicit Semantics**: Filters compile to a visible predicate tree
//!    built by a literal left fold, so `a.and(b).or(c)` reads - and tests -
//!    as `(a AND b) OR c`.
//!
//! ## Architecture
//!
//! - **Pipeline**: Catalog -> QueryCompiler(filter, sort) -> ordered cards
//!   -> ResultSectioner -> labeled sections.
//!
//! - **Versioned Decks**: `fork` produces the next deck version over
//!   `im`-backed structural sharing; legality rules are a closed tagged
//!   union evaluated in declared order.
//!
//! - **Bounded Memoization**: card values are materialized once and held
//!   in an [`LruCache`] owned by the catalog store.
//!
//! ## Modules
//!
//! - `catalog`: card/pack/investigator values, the catalog capability, the
//!   in-memory reference store
//! - `filter`: filter expressions and compilation to predicate trees
//! - `sort`: multi-column sorting and result sectioning
//! - `deck`: the deck entity, legality rules, diffs, persistence contract
//! - `cache`: the bounded memoizing cache
//! - `error`: the crate-wide error taxonomy

pub mod cache;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod filter;
pub mod sort;

// Re-export commonly used types
pub use crate::cache::LruCache;

pub use crate::catalog::{
    AssetSlot, Card, CardId, CardRecord, CardType, Catalog, EnemyStats, Faction, Investigator,
    InvestigatorId, MemoryCatalog, Pack, PackId, SkillIcon, Skills, Subtype,
};

pub use crate::deck::{
    Deck, DeckDelta, DeckEntry, DeckId, DeckOption, DeckPersistence, MemoryDeckStore,
    ValidationResult,
};

pub use crate::error::{Error, Reference, Result};

pub use crate::filter::{
    normalize_search_text, BoolOp, Clause, CompiledQuery, FilterExpression, Predicate,
    QueryCompiler,
};

pub use crate::sort::{ResultSectioner, Section, SortColumn, SortDirection, SortSpec};
