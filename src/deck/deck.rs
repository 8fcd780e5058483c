//! The versioned deck entity.
//!
//! A `Deck` maps card ids to `(Card, quantity)` entries for one
//! investigator. Decks form a version history list: `fork` produces
//! version N+1 and links both sides. The slot mapping uses `im::HashMap`,
//! so a fork shares structure with its parent instead of copying it.
//!
//! Invariant: every entry has quantity > 0. `change_quantity` is the sole
//! mutator of entries and removes an entry when set to zero.
//!
//! Concurrent forks of the same parent are not guarded here; deck
//! mutations run under the storage collaborator's per-deck single-writer
//! transaction discipline.

use chrono::{DateTime, Utc};
use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{Card, CardId, InvestigatorId};
use crate::error::{Error, Result};

/// Unique identifier for a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeckId(pub u32);

impl DeckId {
    /// Create a new deck ID.
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

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}

/// One deck slot: a card and how many copies are included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card: Card,
    pub quantity: u32,
}

/// A named, versioned multiset of cards owned by one investigator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Unique identifier.
    pub id: DeckId,

    /// Owning investigator.
    pub investigator: InvestigatorId,

    /// Display name.
    pub name: String,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Last mutation time.
    pub updated_at: DateTime<Utc>,

    /// Version number, starting at 1.
    pub version: u32,

    /// Previous deck in the version history, if any.
    pub previous_version: Option<DeckId>,

    /// Next deck in the version history, if any.
    pub next_version: Option<DeckId>,

    slots: ImHashMap<CardId, DeckEntry>,
}

impl Deck {
    /// Create version 1 of a deck: empty mapping, timestamps now.
    #[must_use]
    pub fn new(id: DeckId, investigator: InvestigatorId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            investigator,
            name: name.into(),
            created_at: now,
            updated_at: now,
            version: 1,
            previous_version: None,
            next_version: None,
            slots: ImHashMap::new(),
        }
    }

    /// Fork the next version of this deck.
    ///
    /// The child carries version N+1, the parent's cards, and a back link;
    /// the parent's forward link is set here. Committing both sides is the
    /// persistence collaborator's transaction.
    #[must_use]
    pub fn fork(&mut self, new_id: DeckId, name: impl Into<String>) -> Deck {
        let now = Utc::now();
        let child = Deck {
            id: new_id,
            investigator: self.investigator,
            name: name.into(),
            created_at: now,
            updated_at: now,
            version: self.version + 1,
            previous_version: Some(self.id),
            next_version: None,
            slots: self.slots.clone(),
        };

        self.next_version = Some(new_id);
        self.updated_at = now;
        tracing::debug!(
            "forked deck {} into version {} ({})",
            self.id.raw(),
            child.version,
            child.id.raw()
        );
        child
    }

    /// Set the number of copies of a card.
    ///
    /// Zero removes the entry; a positive count inserts or replaces it
    /// with exactly that count; a negative count is a caller error.
    pub fn change_quantity(&mut self, card: &Card, quantity: i64) -> Result<()> {
        if quantity < 0 {
            return Err(Error::InvalidArgument(format!(
                "negative quantity {} for card {}",
                quantity,
                card.id.raw()
            )));
        }

        if quantity == 0 {
            self.slots.remove(&card.id);
        } else {
            self.slots.insert(
                card.id,
                DeckEntry {
                    card: card.clone(),
                    quantity: quantity as u32,
                },
            );
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Number of copies of a card, zero when absent.
    #[must_use]
    pub fn quantity(&self, id: CardId) -> u32 {
        self.slots.get(&id).map_or(0, |entry| entry.quantity)
    }

    /// Check if the deck holds any copies of a card.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Iterate over the deck's entries.
    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.slots.values()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total copies across all entries.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.slots.values().map(|entry| entry.quantity).sum()
    }

    /// Total copies of non-permanent cards; the count deck size rules see.
    #[must_use]
    pub fn non_permanent_count(&self) -> u32 {
        self.slots
            .values()
            .filter(|entry| !entry.card.permanent)
            .map(|entry| entry.quantity)
            .sum()
    }
}
