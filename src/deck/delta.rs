//! Structural deck diffs.
//!
//! `Deck::delta` compares two deck snapshots and reports, per card, how
//! many copies were added and removed, plus the experience-point delta
//! `Σ(level × qty)` between the snapshots. The surrounding application uses
//! the delta for upgrade and XP accounting.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::catalog::{Catalog, CardId};
use crate::error::Result;

/// Difference between two deck snapshots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckDelta {
    /// Copies present in the target but not in the source, per card.
    pub added: FxHashMap<CardId, u32>,

    /// Copies present in the source but not in the target, per card.
    pub removed: FxHashMap<CardId, u32>,

    /// `Σ(level × qty)` over the target minus the same sum over the
    /// source.
    pub xp_delta: i64,
}

impl DeckDelta {
    /// Check if the delta records no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Replay this delta onto a deck.
    ///
    /// Cards added from nowhere are resolved through the catalog; applying
    /// `self.delta(other)` to `self` reproduces `other`'s multiset.
    pub fn apply<C: Catalog>(&self, deck: &mut Deck, catalog: &C) -> Result<()> {
        for (&id, &count) in &self.added {
            let card = catalog.resolve_card(id)?;
            let quantity = i64::from(deck.quantity(id)) + i64::from(count);
            deck.change_quantity(&card, quantity)?;
        }
        for (&id, &count) in &self.removed {
            let card = catalog.resolve_card(id)?;
            let quantity = i64::from(deck.quantity(id).saturating_sub(count));
            deck.change_quantity(&card, quantity)?;
        }
        Ok(())
    }
}

impl Deck {
    /// Diff this snapshot against `other`.
    ///
    /// Reading order: `self` is the older snapshot, `other` the newer one;
    /// `added` and `removed` describe what happened to reach `other`.
    #[must_use]
    pub fn delta(&self, other: &Deck) -> DeckDelta {
        let mut delta = DeckDelta::default();

        for entry in other.entries() {
            let id = entry.card.id;
            let ours = self.quantity(id);
            let theirs = entry.quantity;

            if theirs > ours {
                delta.added.insert(id, theirs - ours);
            } else if ours > theirs {
                delta.removed.insert(id, ours - theirs);
            }
        }
        for entry in self.entries() {
            if !other.contains(entry.card.id) {
                delta.removed.insert(entry.card.id, entry.quantity);
            }
        }

        let xp = |deck: &Deck| -> i64 {
            deck.entries()
                .map(|entry| i64::from(entry.card.level) * i64::from(entry.quantity))
                .sum()
        };
        delta.xp_delta = xp(other) - xp(self);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Card, CardRecord, CardType, Faction, InvestigatorId, Pack, PackId};
    use crate::deck::DeckId;

    fn card(id: u32, name: &str, level: u8) -> Card {
        let pack = Pack::new(PackId::new(1), "Core Set", 1);
        CardRecord::new(CardId::new(id), name, CardType::Asset, Faction::Guardian)
            .with_level(level)
            .materialize(&pack)
    }

    fn deck(id: u32) -> Deck {
        Deck::new(DeckId::new(id), InvestigatorId::new(1), "Test")
    }

    #[test]
    fn test_identical_decks_have_empty_delta() {
        let machete = card(1, "Machete", 0);
        let mut a = deck(1);
        a.change_quantity(&machete, 2).unwrap();
        let b = a.clone();

        let delta = a.delta(&b);
        assert!(delta.is_empty());
        assert_eq!(delta.xp_delta, 0);
    }

    #[test]
    fn test_quantity_difference_is_split_by_direction() {
        let machete = card(1, "Machete", 0);
        let knife = card(2, "Knife", 0);

        let mut old = deck(1);
        old.change_quantity(&machete, 2).unwrap();
        old.change_quantity(&knife, 2).unwrap();

        let mut new = deck(2);
        new.change_quantity(&machete, 1).unwrap();
        new.change_quantity(&knife, 2).unwrap();

        let delta = old.delta(&new);
        assert!(delta.added.is_empty());
        assert_eq!(delta.removed.get(&machete.id), Some(&1));
        assert!(!delta.removed.contains_key(&knife.id));
    }

    #[test]
    fn test_fully_added_and_fully_removed() {
        let machete = card(1, "Machete", 0);
        let vicious = card(2, "Vicious Blow", 0);

        let mut old = deck(1);
        old.change_quantity(&machete, 2).unwrap();

        let mut new = deck(2);
        new.change_quantity(&vicious, 2).unwrap();

        let delta = old.delta(&new);
        assert_eq!(delta.added.get(&vicious.id), Some(&2));
        assert_eq!(delta.removed.get(&machete.id), Some(&2));
    }

    #[test]
    fn test_xp_delta() {
        let lvl0 = card(1, "Machete", 0);
        let lvl2 = card(2, "Vicious Blow", 2);
        let lvl3 = card(3, "Lightning Gun", 3);

        let mut old = deck(1);
        old.change_quantity(&lvl0, 2).unwrap();
        old.change_quantity(&lvl2, 1).unwrap();

        let mut new = deck(2);
        new.change_quantity(&lvl0, 2).unwrap();
        new.change_quantity(&lvl3, 2).unwrap();

        // Old XP 2, new XP 6.
        let delta = old.delta(&new);
        assert_eq!(delta.xp_delta, 4);

        let reverse = new.delta(&old);
        assert_eq!(reverse.xp_delta, -4);
    }
}
