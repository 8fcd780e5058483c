//! Filter expressions - declarative card predicates.
//!
//! A `FilterExpression` is one predicate node: set-valued fields over card
//! attributes, scalar toggles, and an ordered chain of `(operator, nested
//! expression)` pairs. The chain is combined by a left fold in declaration
//! order, so `a.and(b).or(c)` means `(a AND b) OR c` - strictly
//! left-associative, never re-balanced.
//!
//! ## Subfilter Propagation
//!
//! Existence checks (`uses_deck_id`, `uses_traits`) always recurse into
//! subfilters. The mutating scalar toggles (`full_text_search`, `deck_id`,
//! `hide_weaknesses`) do NOT propagate on their own; callers opt in with
//! [`apply_to_subfilters`](FilterExpression::apply_to_subfilters). The
//! asymmetry is part of the filter contract.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::catalog::{AssetSlot, CardId, CardType, Faction, InvestigatorId, PackId, SkillIcon, Subtype};
use crate::deck::DeckId;
use crate::error::{Error, Result};

/// Boolean operator combining a subfilter with the expression to its left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolOp {
    And,
    Or,
}

/// One predicate node over card attributes.
///
/// Empty set fields and unset scalars contribute nothing; every non-empty
/// field becomes one conjunctive clause when compiled.
///
/// ## Example
///
/// ```
/// use cardex::catalog::Faction;
/// use cardex::filter::FilterExpression;
///
/// let guardians = FilterExpression::new().with_factions([Faction::Guardian]);
/// let seekers = FilterExpression::new().with_factions([Faction::Seeker]);
/// let either = guardians.or(seekers);
///
/// assert_eq!(either.subfilters.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    /// Restrict to these card ids.
    pub ids: FxHashSet<CardId>,
    /// Restrict to these card types.
    pub types: FxHashSet<CardType>,
    /// Restrict to these weakness tags.
    pub subtypes: FxHashSet<Subtype>,
    /// Restrict to these factions.
    pub factions: FxHashSet<Faction>,
    /// Restrict to cards from these packs.
    pub packs: FxHashSet<PackId>,
    /// Restrict to assets in these slots.
    pub slots: FxHashSet<AssetSlot>,
    /// Restrict to these experience levels.
    pub levels: FxHashSet<u8>,
    /// Restrict to cards with icons among this selection (complement
    /// semantics; see the compiler).
    pub skill_icons: FxHashSet<SkillIcon>,
    /// Restrict to cards carrying at least one of these traits.
    pub traits: FxHashSet<String>,
    /// Exclude cards carrying any of these traits.
    pub prohibited_traits: FxHashSet<String>,
    /// Restrict to this investigator's signature pool.
    pub investigator_id: Option<InvestigatorId>,
    /// Restrict to cards in this deck.
    pub deck_id: Option<DeckId>,
    /// Free-text search, normalized and prefix-matched by the compiler.
    pub full_text_search: Option<String>,
    /// Exclude cards with deck-building restrictions.
    pub hide_restricted: bool,
    /// Exclude weakness cards.
    pub hide_weaknesses: bool,
    /// Restrict to cards whose text grants charge uses.
    pub uses_charges: bool,
    /// Restrict to user favorites.
    pub only_favorite: bool,
    /// Restrict to permanent cards.
    pub only_permanent: bool,
    /// Restrict to earnable cards.
    pub only_earned: bool,
    /// Left-folded chain of nested expressions, in declaration order.
    pub subfilters: Vec<(BoolOp, FilterExpression)>,
}

impl FilterExpression {
    /// Create an empty expression matching every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to specific card ids (builder pattern).
    #[must_use]
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = CardId>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    /// Restrict to card types (builder pattern).
    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = CardType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Restrict to weakness tags (builder pattern).
    #[must_use]
    pub fn with_subtypes(mut self, subtypes: impl IntoIterator<Item = Subtype>) -> Self {
        self.subtypes = subtypes.into_iter().collect();
        self
    }

    /// Restrict to factions (builder pattern).
    #[must_use]
    pub fn with_factions(mut self, factions: impl IntoIterator<Item = Faction>) -> Self {
        self.factions = factions.into_iter().collect();
        self
    }

    /// Restrict to packs (builder pattern).
    #[must_use]
    pub fn with_packs(mut self, packs: impl IntoIterator<Item = PackId>) -> Self {
        self.packs = packs.into_iter().collect();
        self
    }

    /// Restrict to asset slots (builder pattern).
    #[must_use]
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = AssetSlot>) -> Self {
        self.slots = slots.into_iter().collect();
        self
    }

    /// Restrict to experience levels (builder pattern).
    #[must_use]
    pub fn with_levels(mut self, levels: impl IntoIterator<Item = u8>) -> Self {
        self.levels = levels.into_iter().collect();
        self
    }

    /// Restrict to the inclusive level range `min..=max` (builder pattern).
    ///
    /// An inverted range is a caller error.
    pub fn with_level_range(mut self, min: u8, max: u8) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidArgument(format!(
                "inverted level range {}..={}",
                min, max
            )));
        }
        self.levels = (min..=max).collect();
        Ok(self)
    }

    /// Restrict to cards with icons among this selection (builder pattern).
    #[must_use]
    pub fn with_skill_icons(mut self, icons: impl IntoIterator<Item = SkillIcon>) -> Self {
        self.skill_icons = icons.into_iter().collect();
        self
    }

    /// Restrict to cards carrying at least one of these traits (builder
    /// pattern).
    #[must_use]
    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Exclude cards carrying any of these traits (builder pattern).
    #[must_use]
    pub fn with_prohibited_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prohibited_traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to an investigator's signature pool (builder pattern).
    #[must_use]
    pub fn with_investigator(mut self, id: InvestigatorId) -> Self {
        self.investigator_id = Some(id);
        self
    }

    /// Restrict to cards in a deck (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, id: DeckId) -> Self {
        self.deck_id = Some(id);
        self
    }

    /// Set the free-text search string (builder pattern).
    #[must_use]
    pub fn with_full_text(mut self, text: impl Into<String>) -> Self {
        self.full_text_search = Some(text.into());
        self
    }

    /// Exclude restricted cards (builder pattern).
    #[must_use]
    pub fn hide_restricted(mut self) -> Self {
        self.hide_restricted = true;
        self
    }

    /// Exclude weakness cards (builder pattern).
    #[must_use]
    pub fn hide_weaknesses(mut self) -> Self {
        self.hide_weaknesses = true;
        self
    }

    /// Restrict to cards granting charge uses (builder pattern).
    #[must_use]
    pub fn uses_charges(mut self) -> Self {
        self.uses_charges = true;
        self
    }

    /// Restrict to user favorites (builder pattern).
    #[must_use]
    pub fn only_favorite(mut self) -> Self {
        self.only_favorite = true;
        self
    }

    /// Restrict to permanent cards (builder pattern).
    #[must_use]
    pub fn only_permanent(mut self) -> Self {
        self.only_permanent = true;
        self
    }

    /// Restrict to earnable cards (builder pattern).
    #[must_use]
    pub fn only_earned(mut self) -> Self {
        self.only_earned = true;
        self
    }

    /// Append a subfilter combined with AND.
    #[must_use]
    pub fn and(mut self, sub: FilterExpression) -> Self {
        self.subfilters.push((BoolOp::And, sub));
        self
    }

    /// Append a subfilter combined with OR.
    #[must_use]
    pub fn or(mut self, sub: FilterExpression) -> Self {
        self.subfilters.push((BoolOp::Or, sub));
        self
    }

    /// Check whether this expression or any subfilter references a deck.
    ///
    /// Recurses unconditionally, unlike the mutating toggles.
    #[must_use]
    pub fn uses_deck_id(&self) -> bool {
        self.deck_id.is_some() || self.subfilters.iter().any(|(_, sub)| sub.uses_deck_id())
    }

    /// Check whether this expression or any subfilter filters on traits.
    ///
    /// Recurses unconditionally, unlike the mutating toggles.
    #[must_use]
    pub fn uses_traits(&self) -> bool {
        !self.traits.is_empty()
            || !self.prohibited_traits.is_empty()
            || self.subfilters.iter().any(|(_, sub)| sub.uses_traits())
    }

    /// Copy the scalar toggles into every subfilter, recursively.
    ///
    /// Copies `full_text_search`, `deck_id`, and `hide_weaknesses`. This is
    /// the explicit opt-in; the toggles never propagate on their own.
    pub fn apply_to_subfilters(&mut self) {
        for (_, sub) in &mut self.subfilters {
            sub.full_text_search = self.full_text_search.clone();
            sub.deck_id = self.deck_id;
            sub.hide_weaknesses = self.hide_weaknesses;
            sub.apply_to_subfilters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_expression() {
        let filter = FilterExpression::new();
        assert!(filter.ids.is_empty());
        assert!(filter.subfilters.is_empty());
        assert!(!filter.uses_deck_id());
        assert!(!filter.uses_traits());
    }

    #[test]
    fn test_chain_preserves_declaration_order() {
        let a = FilterExpression::new().with_factions([Faction::Guardian]);
        let b = FilterExpression::new().with_levels([0]);
        let c = FilterExpression::new().with_factions([Faction::Seeker]);

        let chained = a.and(b).or(c);
        assert_eq!(chained.subfilters.len(), 2);
        assert_eq!(chained.subfilters[0].0, BoolOp::And);
        assert_eq!(chained.subfilters[1].0, BoolOp::Or);
    }

    #[test]
    fn test_level_range() {
        let filter = FilterExpression::new().with_level_range(1, 3).unwrap();
        assert_eq!(filter.levels.len(), 3);
        assert!(filter.levels.contains(&2));
        assert!(!filter.levels.contains(&0));
    }

    #[test]
    fn test_inverted_level_range_is_rejected() {
        let err = FilterExpression::new().with_level_range(4, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_existence_checks_recurse() {
        let inner = FilterExpression::new().with_traits(["Spell"]);
        let outer = FilterExpression::new().and(inner);

        assert!(outer.uses_traits());
        assert!(!outer.uses_deck_id());

        let deep = FilterExpression::new()
            .and(FilterExpression::new().or(FilterExpression::new().with_deck(DeckId::new(7))));
        assert!(deep.uses_deck_id());
    }

    #[test]
    fn test_toggles_do_not_propagate_implicitly() {
        let outer = FilterExpression::new()
            .with_full_text("rex")
            .hide_weaknesses()
            .and(FilterExpression::new());

        let (_, sub) = &outer.subfilters[0];
        assert!(sub.full_text_search.is_none());
        assert!(!sub.hide_weaknesses);
    }

    #[test]
    fn test_apply_to_subfilters_is_recursive() {
        let mut outer = FilterExpression::new()
            .with_full_text("rex")
            .with_deck(DeckId::new(3))
            .hide_weaknesses()
            .and(FilterExpression::new().or(FilterExpression::new()));

        outer.apply_to_subfilters();

        let (_, sub) = &outer.subfilters[0];
        assert_eq!(sub.full_text_search.as_deref(), Some("rex"));
        assert_eq!(sub.deck_id, Some(DeckId::new(3)));
        assert!(sub.hide_weaknesses);

        let (_, nested) = &sub.subfilters[0];
        assert_eq!(nested.full_text_search.as_deref(), Some("rex"));
        assert_eq!(nested.deck_id, Some(DeckId::new(3)));
        assert!(nested.hide_weaknesses);
    }

    #[test]
    fn test_serialization_round_trip() {
        let filter = FilterExpression::new()
            .with_factions([Faction::Mystic])
            .with_levels([0, 1])
            .or(FilterExpression::new().with_traits(["Spell"]));

        let json = serde_json::to_string(&filter).unwrap();
        let back: FilterExpression = serde_json::from_str(&json).unwrap();
        assert_eq!(filter, back);
    }
}
