//! In-memory reference catalog.
//!
//! `MemoryCatalog` holds raw card records plus the side data queries need:
//! the pack and investigator tables, the per-card trait relation, deck
//! membership, signature-card pools, and the tokenized search index. It is
//! the reference realization of the compiled-predicate semantics and backs
//! the test suite.
//!
//! Card value objects are materialized from records on demand and memoized
//! in an injected [`LruCache`]; the cache lives and dies with the catalog,
//! never in a process-global.

use rustc_hash::{FxHashMap, FxHashSet};

use super::card::{Card, CardId, SkillIcon};
use super::investigator::{Investigator, InvestigatorId};
use super::pack::{Pack, PackId};
use super::record::CardRecord;
use super::store::Catalog;
use crate::cache::LruCache;
use crate::deck::DeckId;
use crate::error::{Error, Reference, Result};
use crate::filter::{BoolOp, Clause, CompiledQuery, Predicate};

/// In-memory implementation of [`Catalog`].
#[derive(Debug)]
pub struct MemoryCatalog {
    records: FxHashMap<CardId, CardRecord>,
    packs: FxHashMap<PackId, Pack>,
    investigators: FxHashMap<InvestigatorId, Investigator>,

    /// deck id -> member card ids; the join target for `InDeck`.
    deck_cards: FxHashMap<DeckId, FxHashSet<CardId>>,

    /// investigator id -> signature card ids.
    investigator_cards: FxHashMap<InvestigatorId, FxHashSet<CardId>>,

    /// card id -> lowercase index tokens drawn from name, type, faction,
    /// traits, slot, and rules text.
    index: FxHashMap<CardId, Vec<String>>,

    cache: LruCache<CardId, Card>,
}

impl MemoryCatalog {
    /// Create an empty catalog with a card cache of `cache_capacity`.
    #[must_use]
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            records: FxHashMap::default(),
            packs: FxHashMap::default(),
            investigators: FxHashMap::default(),
            deck_cards: FxHashMap::default(),
            investigator_cards: FxHashMap::default(),
            index: FxHashMap::default(),
            cache: LruCache::new(cache_capacity),
        }
    }

    /// Load a pack.
    pub fn add_pack(&mut self, pack: Pack) {
        self.packs.insert(pack.id, pack);
    }

    /// Load an investigator.
    pub fn add_investigator(&mut self, investigator: Investigator) {
        self.investigators.insert(investigator.id, investigator);
    }

    /// Load a card record and index it for search.
    pub fn add_record(&mut self, record: CardRecord) {
        self.index.insert(record.id, index_tokens(&record));
        self.records.insert(record.id, record);
    }

    /// Record which cards a deck contains, for `InDeck` joins.
    pub fn set_deck_cards(&mut self, deck: DeckId, cards: impl IntoIterator<Item = CardId>) {
        self.deck_cards.insert(deck, cards.into_iter().collect());
    }

    /// Record an investigator's signature card pool.
    pub fn set_investigator_cards(
        &mut self,
        investigator: InvestigatorId,
        cards: impl IntoIterator<Item = CardId>,
    ) {
        self.investigator_cards
            .insert(investigator, cards.into_iter().collect());
    }

    /// Number of loaded card records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Materialize a card from its record, resolving the pack reference.
    fn build_card(&self, id: CardId) -> Result<Card> {
        let record = self
            .records
            .get(&id)
            .ok_or(Error::NotFound(Reference::Card(id)))?;
        let pack = self.packs.get(&record.pack).ok_or(Error::InvalidReference {
            card: id,
            reference: Reference::Pack(record.pack),
        })?;
        Ok(record.materialize(pack))
    }

    fn predicate_matches(&self, predicate: &Predicate, card: &Card) -> Result<bool> {
        match predicate {
            Predicate::Leaf(clauses) => {
                for clause in clauses {
                    if !self.clause_matches(clause, card)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Predicate::Combine { left, op, right } => {
                let left = self.predicate_matches(left, card)?;
                let right = self.predicate_matches(right, card)?;
                Ok(match op {
                    BoolOp::And => left && right,
                    BoolOp::Or => left || right,
                })
            }
        }
    }

    fn clause_matches(&self, clause: &Clause, card: &Card) -> Result<bool> {
        Ok(match clause {
            Clause::Ids(ids) => ids.contains(&card.id),
            Clause::Types(types) => types.contains(&card.card_type),
            Clause::Subtypes(subtypes) => {
                card.subtype.is_some_and(|subtype| subtypes.contains(&subtype))
            }
            Clause::Factions(factions) => factions.contains(&card.faction),
            Clause::Packs(packs) => packs.contains(&card.pack),
            Clause::Slots(slots) => card.slot.is_some_and(|slot| slots.contains(&slot)),
            Clause::Levels(levels) => levels.contains(&card.level),
            // The complement rule: every icon outside the selection must
            // be zero.
            Clause::SkillIcons(selected) => SkillIcon::ALL
                .iter()
                .filter(|icon| !selected.contains(icon))
                .all(|icon| card.skill(*icon) == 0),
            Clause::Traits(traits) => traits.iter().any(|name| card.has_trait(name)),
            Clause::ProhibitedTraits(traits) => !traits.iter().any(|name| card.has_trait(name)),
            Clause::Investigator(id) => self
                .investigator_cards
                .get(id)
                .is_some_and(|pool| pool.contains(&card.id)),
            Clause::InDeck(id) => self
                .deck_cards
                .get(id)
                .ok_or(Error::NotFound(Reference::Deck(*id)))?
                .contains(&card.id),
            Clause::TextPrefix(query) => {
                let tokens = self.index.get(&card.id).map_or(&[] as &[String], Vec::as_slice);
                query.split_whitespace().all(|term| {
                    tokens.iter().any(|token| token.starts_with(term))
                })
            }
            Clause::HideRestricted => !card.restricted,
            Clause::HideWeaknesses => card.subtype.is_none(),
            Clause::UsesCharges => {
                let text = card.text.to_lowercase();
                text.contains("uses (") && text.contains("charges")
            }
            Clause::OnlyFavorite => card.favorite,
            Clause::OnlyPermanent => card.permanent,
            Clause::OnlyEarned => card.earnable,
        })
    }
}

impl Catalog for MemoryCatalog {
    fn resolve_card(&self, id: CardId) -> Result<Card> {
        let mut failure = None;
        let card = self.cache.get_or_else(id, || match self.build_card(id) {
            Ok(card) => Some(card),
            Err(err) => {
                failure = Some(err);
                None
            }
        });

        match card {
            Some(card) => Ok(card),
            None => Err(failure.unwrap_or(Error::NotFound(Reference::Card(id)))),
        }
    }

    fn query_cards(&self, query: &CompiledQuery) -> Result<Vec<Card>> {
        // Id order is the catalog's storage order; it is what a stable
        // sort preserves on full ties.
        let mut ids: Vec<CardId> = self.records.keys().copied().collect();
        ids.sort_unstable();

        let mut matches = Vec::new();
        for id in ids {
            let card = self.resolve_card(id)?;
            if self.predicate_matches(&query.predicate, &card)? {
                matches.push(card);
            }
        }

        query.sort.sort(&mut matches);
        tracing::debug!("query matched {} of {} cards", matches.len(), self.records.len());
        Ok(matches)
    }

    fn packs(&self) -> Result<Vec<Pack>> {
        let mut packs: Vec<Pack> = self.packs.values().cloned().collect();
        packs.sort_by_key(|pack| pack.position);
        Ok(packs)
    }

    fn investigators(&self) -> Result<Vec<Investigator>> {
        let mut investigators: Vec<Investigator> =
            self.investigators.values().cloned().collect();
        investigators.sort_by_key(|investigator| investigator.id);
        Ok(investigators)
    }
}

/// Lowercase index tokens for one record.
fn index_tokens(record: &CardRecord) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut push_words = |source: &str| {
        for word in source.split_whitespace() {
            let word: String = word
                .chars()
                .filter(|c| c.is_alphanumeric() || matches!(c, '_' | ':'))
                .collect::<String>()
                .to_lowercase();
            if !word.is_empty() {
                tokens.push(word);
            }
        }
    };

    push_words(&record.name);
    push_words(record.card_type.name());
    push_words(record.faction.name());
    for name in &record.traits {
        push_words(name);
    }
    if let Some(slot) = record.slot {
        push_words(slot.name());
    }
    push_words(&record.text);
    tokens
}
