//! Investigator value objects.
//!
//! An investigator owns the deck-building contract: the required deck size
//! and an ordered list of [`DeckOption`] legality rules. Deck validation
//! walks the rules in declared order.

use serde::{Deserialize, Serialize};

use super::card::Faction;
use crate::deck::DeckOption;

/// Unique identifier for an investigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InvestigatorId(pub u32);

impl InvestigatorId {
    /// Create a new investigator ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InvestigatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Investigator({})", self.0)
    }
}

/// An investigator and their deck-building contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investigator {
    /// Unique identifier.
    pub id: InvestigatorId,

    /// Display name.
    pub name: String,

    /// Faction the investigator belongs to.
    pub faction: Faction,

    /// Required count of non-permanent cards in a legal deck.
    pub deck_size: u32,

    /// Legality rules, evaluated in declared order.
    pub deck_options: Vec<DeckOption>,
}

impl Investigator {
    /// Create a new investigator with no extra legality rules.
    #[must_use]
    pub fn new(
        id: InvestigatorId,
        name: impl Into<String>,
        faction: Faction,
        deck_size: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            faction,
            deck_size,
            deck_options: Vec::new(),
        }
    }

    /// Append a legality rule (builder pattern).
    #[must_use]
    pub fn with_option(mut self, option: DeckOption) -> Self {
        self.deck_options.push(option);
        self
    }
}
