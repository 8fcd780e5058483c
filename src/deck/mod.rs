//! Decks: the versioned deck entity, legality rules, diffs, and the
//! persistence contract.
//!
//! ## Key Types
//!
//! - `Deck`: named, versioned multiset of cards owned by one investigator
//! - `DeckOption` / `ValidationResult`: pluggable legality rules
//! - `DeckDelta`: structural diff between two deck snapshots
//! - `DeckPersistence`: the storage capability; `MemoryDeckStore` is the
//!   reference implementation

pub mod deck;
pub mod delta;
pub mod options;
pub mod persistence;

pub use deck::{Deck, DeckEntry, DeckId};
pub use delta::DeckDelta;
pub use options::{DeckOption, ValidationResult};
pub use persistence::{DeckPersistence, MemoryDeckStore};
