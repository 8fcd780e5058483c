//! Filter compilation.
//!
//! `QueryCompiler` turns a [`FilterExpression`] plus a [`SortSpec`] into a
//! [`CompiledQuery`]: an explicit [`Predicate`] tree the catalog
//! collaborator executes. Compilation resolves every referenced entity up
//! front - an unknown card, pack, or investigator aborts the whole compile
//! with `NotFound`, so a query never yields partial results.
//!
//! ## Predicate Shape
//!
//! Each expression node compiles to a `Leaf` holding its conjunctive
//! clauses; the subfilter chain is folded strictly left-to-right:
//!
//! ```text
//! result := Leaf(own clauses)
//! for (op, sub) in subfilters:
//!     result := Combine(result, op, compile(sub))
//! ```
//!
//! `a.and(b).or(c)` therefore compiles to `(a AND b) OR c`. The tree makes
//! the non-associative precedence visible instead of burying it in
//! recursion.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::expr::{BoolOp, FilterExpression};
use crate::catalog::{
    AssetSlot, CardType, Catalog, CardId, Faction, InvestigatorId, PackId, SkillIcon, Subtype,
};
use crate::deck::DeckId;
use crate::error::{Error, Reference, Result};
use crate::sort::SortSpec;

/// One conjunctive clause over a card attribute.
///
/// The clause names what must hold; the catalog collaborator realizes the
/// matching rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Clause {
    /// Card id is one of these.
    Ids(FxHashSet<CardId>),
    /// Card type is one of these.
    Types(FxHashSet<CardType>),
    /// Weakness tag is one of these.
    Subtypes(FxHashSet<Subtype>),
    /// Faction is one of these.
    Factions(FxHashSet<Faction>),
    /// Printed in one of these packs.
    Packs(FxHashSet<PackId>),
    /// Asset slot is one of these.
    Slots(FxHashSet<AssetSlot>),
    /// Experience level is one of these.
    Levels(FxHashSet<u8>),
    /// Card shows icons among the selection only.
    ///
    /// Evaluated as the complement: every icon NOT in the selection must be
    /// zero. A positive any-of test over the selection is not equivalent
    /// and must not be substituted.
    SkillIcons(FxHashSet<SkillIcon>),
    /// Card carries at least one of these traits.
    Traits(FxHashSet<String>),
    /// Card carries none of these traits.
    ProhibitedTraits(FxHashSet<String>),
    /// Card belongs to this investigator's signature pool.
    Investigator(InvestigatorId),
    /// Card is in this deck; joins against deck-membership data.
    InDeck(DeckId),
    /// Normalized search terms, each prefix-matched against the card's
    /// search index.
    TextPrefix(String),
    /// Card carries no deck-building restriction.
    HideRestricted,
    /// Card carries no weakness tag.
    HideWeaknesses,
    /// Card text grants charge uses.
    UsesCharges,
    /// Card is a user favorite.
    OnlyFavorite,
    /// Card is permanent.
    OnlyPermanent,
    /// Card is earnable.
    OnlyEarned,
}

/// Compiled predicate tree.
///
/// `Leaf` is one expression node's own clauses ANDed together; an empty
/// leaf matches every card. `Combine` is one left-fold step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    Leaf(Vec<Clause>),
    Combine {
        left: Box<Predicate>,
        op: BoolOp,
        right: Box<Predicate>,
    },
}

impl Predicate {
    /// Total clause count across all leaves.
    #[must_use]
    pub fn clause_count(&self) -> usize {
        match self {
            Predicate::Leaf(clauses) => clauses.len(),
            Predicate::Combine { left, right, .. } => left.clause_count() + right.clause_count(),
        }
    }
}

/// A compiled query: predicate plus sort order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompiledQuery {
    pub predicate: Predicate,
    pub sort: SortSpec,
}

/// Normalize a free-text search string.
///
/// Strips every character outside alphanumerics, space, `_`, and `:`,
/// lowercases the rest, and trims. An empty result means the search
/// contributes no clause.
#[must_use]
pub fn normalize_search_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | ':'))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Compiles filter expressions against a catalog.
pub struct QueryCompiler<'a, C: Catalog> {
    catalog: &'a C,
}

impl<'a, C: Catalog> QueryCompiler<'a, C> {
    /// Create a compiler over a catalog.
    #[must_use]
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Compile a filter and sort order into an executable query.
    ///
    /// Every card id, pack, and investigator the filter references is
    /// resolved here; the first unresolved reference aborts the compile.
    /// A referenced deck is resolved by the collaborator at execution,
    /// where the membership data lives.
    pub fn compile(&self, filter: &FilterExpression, sort: SortSpec) -> Result<CompiledQuery> {
        let packs: FxHashSet<PackId> =
            self.catalog.packs()?.into_iter().map(|p| p.id).collect();
        let investigators: FxHashSet<InvestigatorId> = self
            .catalog
            .investigators()?
            .into_iter()
            .map(|i| i.id)
            .collect();

        let predicate = self.compile_node(filter, &packs, &investigators)?;
        tracing::debug!(
            "compiled filter into {} clause(s)",
            predicate.clause_count()
        );
        Ok(CompiledQuery { predicate, sort })
    }

    fn compile_node(
        &self,
        filter: &FilterExpression,
        packs: &FxHashSet<PackId>,
        investigators: &FxHashSet<InvestigatorId>,
    ) -> Result<Predicate> {
        let mut result = Predicate::Leaf(self.own_clauses(filter, packs, investigators)?);

        // Literal left fold, in declaration order.
        for (op, sub) in &filter.subfilters {
            let right = self.compile_node(sub, packs, investigators)?;
            result = Predicate::Combine {
                left: Box::new(result),
                op: *op,
                right: Box::new(right),
            };
        }
        Ok(result)
    }

    /// Build one node's own conjunctive clauses.
    fn own_clauses(
        &self,
        filter: &FilterExpression,
        packs: &FxHashSet<PackId>,
        investigators: &FxHashSet<InvestigatorId>,
    ) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        if !filter.ids.is_empty() {
            for id in &filter.ids {
                self.catalog.resolve_card(*id)?;
            }
            clauses.push(Clause::Ids(filter.ids.clone()));
        }
        if !filter.types.is_empty() {
            clauses.push(Clause::Types(filter.types.clone()));
        }
        if !filter.subtypes.is_empty() {
            clauses.push(Clause::Subtypes(filter.subtypes.clone()));
        }
        if !filter.factions.is_empty() {
            clauses.push(Clause::Factions(filter.factions.clone()));
        }
        if !filter.packs.is_empty() {
            for pack in &filter.packs {
                if !packs.contains(pack) {
                    return Err(Error::NotFound(Reference::Pack(*pack)));
                }
            }
            clauses.push(Clause::Packs(filter.packs.clone()));
        }
        if !filter.slots.is_empty() {
            clauses.push(Clause::Slots(filter.slots.clone()));
        }
        if !filter.levels.is_empty() {
            clauses.push(Clause::Levels(filter.levels.clone()));
        }
        if !filter.skill_icons.is_empty() {
            clauses.push(Clause::SkillIcons(filter.skill_icons.clone()));
        }
        if !filter.traits.is_empty() {
            clauses.push(Clause::Traits(filter.traits.clone()));
        }
        if !filter.prohibited_traits.is_empty() {
            clauses.push(Clause::ProhibitedTraits(filter.prohibited_traits.clone()));
        }
        if let Some(id) = filter.investigator_id {
            if !investigators.contains(&id) {
                return Err(Error::NotFound(Reference::Investigator(id)));
            }
            clauses.push(Clause::Investigator(id));
        }
        if let Some(id) = filter.deck_id {
            clauses.push(Clause::InDeck(id));
        }
        if let Some(raw) = &filter.full_text_search {
            let normalized = normalize_search_text(raw);
            if !normalized.is_empty() {
                clauses.push(Clause::TextPrefix(normalized));
            }
        }
        if filter.hide_restricted {
            clauses.push(Clause::HideRestricted);
        }
        if filter.hide_weaknesses {
            clauses.push(Clause::HideWeaknesses);
        }
        if filter.uses_charges {
            clauses.push(Clause::UsesCharges);
        }
        if filter.only_favorite {
            clauses.push(Clause::OnlyFavorite);
        }
        if filter.only_permanent {
            clauses.push(Clause::OnlyPermanent);
        }
        if filter.only_earned {
            clauses.push(Clause::OnlyEarned);
        }

        Ok(clauses)
    }
}
