//! Error types for the cardex library.
//!
//! Every fallible operation in the crate returns [`Result`]. There is no
//! internal recovery: an error aborts the whole operation and propagates
//! unchanged to the caller. Queries are all-or-nothing - a fully resolved,
//! fully sorted result or an error, never a partial one.

use crate::catalog::{CardId, InvestigatorId, PackId};
use crate::deck::DeckId;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A reference to a catalog or store entity, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference {
    /// A card id.
    Card(CardId),
    /// A pack id.
    Pack(PackId),
    /// An investigator id.
    Investigator(InvestigatorId),
    /// A deck id.
    Deck(DeckId),
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reference::Card(id) => write!(f, "card {}", id.raw()),
            Reference::Pack(id) => write!(f, "pack {}", id.raw()),
            Reference::Investigator(id) => write!(f, "investigator {}", id.raw()),
            Reference::Deck(id) => write!(f, "deck {}", id.raw()),
        }
    }
}

/// Core error type for cardex operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced entity does not exist in the catalog or store.
    #[error("{0} not found")]
    NotFound(Reference),

    /// A card row points at a pack or investigator absent from the loaded
    /// catalog.
    #[error("card {} references {reference}, which is not loaded", .card.raw())]
    InvalidReference {
        /// The card carrying the dangling reference.
        card: CardId,
        /// The entity the card points at.
        reference: Reference,
    },

    /// The caller passed an argument outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Opaque failure inside a storage collaborator.
    #[error("storage failure: {0}")]
    Storage(String),
}
