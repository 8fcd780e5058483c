//! Deck persistence contract.
//!
//! The core defines the `DeckPersistence` trait; the surrounding
//! application supplies the real store. Decks are plain values reconciled
//! with the store by the application, not self-persisting entities.
//!
//! `MemoryDeckStore` is the reference implementation backing the test
//! suite.

use rustc_hash::FxHashMap;

use super::deck::{Deck, DeckId};
use crate::catalog::{Card, InvestigatorId};
use crate::error::{Error, Reference, Result};

/// Storage capability for decks.
pub trait DeckPersistence {
    /// Create and store version 1 of a deck.
    fn create_deck(&mut self, investigator: InvestigatorId, name: &str) -> Result<Deck>;

    /// Fetch a stored deck.
    fn fetch_deck(&self, id: DeckId) -> Result<Deck>;

    /// Set the stored number of copies of a card in a deck.
    fn save_quantity(&mut self, deck_id: DeckId, card: &Card, quantity: i64) -> Result<()>;

    /// Delete a stored deck.
    fn delete_deck(&mut self, id: DeckId) -> Result<()>;
}

/// In-memory reference implementation of [`DeckPersistence`].
#[derive(Debug, Default)]
pub struct MemoryDeckStore {
    decks: FxHashMap<DeckId, Deck>,
    next_id: u32,
}

impl MemoryDeckStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Fork a stored deck into its next version.
    ///
    /// Updates the parent's forward link and stores the child in one step,
    /// standing in for the real store's transaction.
    pub fn fork_deck(&mut self, parent: DeckId, name: &str) -> Result<Deck> {
        let new_id = self.alloc_id();
        let parent = self
            .decks
            .get_mut(&parent)
            .ok_or(Error::NotFound(Reference::Deck(parent)))?;

        let child = parent.fork(new_id, name);
        self.decks.insert(child.id, child.clone());
        Ok(child)
    }

    fn alloc_id(&mut self) -> DeckId {
        self.next_id += 1;
        DeckId::new(self.next_id)
    }
}

impl DeckPersistence for MemoryDeckStore {
    fn create_deck(&mut self, investigator: InvestigatorId, name: &str) -> Result<Deck> {
        let id = self.alloc_id();
        let deck = Deck::new(id, investigator, name);
        self.decks.insert(id, deck.clone());
        tracing::debug!("created deck {} for investigator {}", id.raw(), investigator.raw());
        Ok(deck)
    }

    fn fetch_deck(&self, id: DeckId) -> Result<Deck> {
        self.decks
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(Reference::Deck(id)))
    }

    fn save_quantity(&mut self, deck_id: DeckId, card: &Card, quantity: i64) -> Result<()> {
        let deck = self
            .decks
            .get_mut(&deck_id)
            .ok_or(Error::NotFound(Reference::Deck(deck_id)))?;
        deck.change_quantity(card, quantity)
    }

    fn delete_deck(&mut self, id: DeckId) -> Result<()> {
        self.decks
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NotFound(Reference::Deck(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardId, CardRecord, CardType, Faction, Pack, PackId};

    fn machete() -> Card {
        let pack = Pack::new(PackId::new(1), "Core Set", 1);
        CardRecord::new(CardId::new(1), "Machete", CardType::Asset, Faction::Guardian)
            .materialize(&pack)
    }

    #[test]
    fn test_create_and_fetch() {
        let mut store = MemoryDeckStore::new();
        let deck = store.create_deck(InvestigatorId::new(1), "Roland's kit").unwrap();

        let fetched = store.fetch_deck(deck.id).unwrap();
        assert_eq!(fetched, deck);
        assert_eq!(fetched.version, 1);
    }

    #[test]
    fn test_fetch_unknown_deck() {
        let store = MemoryDeckStore::new();
        let err = store.fetch_deck(DeckId::new(99)).unwrap_err();
        assert!(matches!(err, Error::NotFound(Reference::Deck(_))));
    }

    #[test]
    fn test_save_quantity_round_trips_through_the_store() {
        let mut store = MemoryDeckStore::new();
        let deck = store.create_deck(InvestigatorId::new(1), "Test").unwrap();
        let machete = machete();

        store.save_quantity(deck.id, &machete, 2).unwrap();
        assert_eq!(store.fetch_deck(deck.id).unwrap().quantity(machete.id), 2);

        store.save_quantity(deck.id, &machete, 0).unwrap();
        assert!(!store.fetch_deck(deck.id).unwrap().contains(machete.id));
    }

    #[test]
    fn test_fork_updates_both_sides_in_store() {
        let mut store = MemoryDeckStore::new();
        let parent = store.create_deck(InvestigatorId::new(1), "v1").unwrap();
        store.save_quantity(parent.id, &machete(), 2).unwrap();

        let child = store.fork_deck(parent.id, "v2").unwrap();

        let stored_parent = store.fetch_deck(parent.id).unwrap();
        let stored_child = store.fetch_deck(child.id).unwrap();
        assert_eq!(stored_parent.next_version, Some(child.id));
        assert_eq!(stored_child.previous_version, Some(parent.id));
        assert_eq!(stored_child.version, 2);
        assert_eq!(stored_child.quantity(CardId::new(1)), 2);
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryDeckStore::new();
        let deck = store.create_deck(InvestigatorId::new(1), "Test").unwrap();

        store.delete_deck(deck.id).unwrap();
        assert!(store.is_empty());
        assert!(store.delete_deck(deck.id).is_err());
    }
}
