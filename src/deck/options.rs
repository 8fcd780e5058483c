//! Deck legality rules.
//!
//! `DeckOption` is a closed tagged union of legality rules so the rule set
//! stays serializable and evaluation stays total: every variant is handled
//! in one exhaustive match. Rules hang off an investigator and run in
//! declared order; the first failure short-circuits validation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::catalog::{Faction, Investigator};

/// Outcome of evaluating a legality rule or a whole deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the check passed.
    pub is_valid: bool,

    /// Failure description; `None` when valid.
    pub message: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// A failing result with a description.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// A pluggable deck legality rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DeckOption {
    /// Cap the copies drawn from a set of factions at given levels.
    ///
    /// Sums the quantities of cards whose faction AND level are both
    /// allowed; the sum may not exceed `max_quantity`.
    AllowedFactions {
        factions: FxHashSet<Faction>,
        levels: FxHashSet<u8>,
        max_quantity: u32,
    },
}

impl DeckOption {
    /// Evaluate the rule against a deck.
    #[must_use]
    pub fn evaluate(&self, deck: &Deck) -> ValidationResult {
        match self {
            DeckOption::AllowedFactions {
                factions,
                levels,
                max_quantity,
            } => {
                let count: u32 = deck
                    .entries()
                    .filter(|entry| {
                        factions.contains(&entry.card.faction)
                            && levels.contains(&entry.card.level)
                    })
                    .map(|entry| entry.quantity)
                    .sum();

                if count > *max_quantity {
                    ValidationResult::invalid(format!(
                        "more than {} cards from the allowed factions",
                        max_quantity
                    ))
                } else {
                    ValidationResult::valid()
                }
            }
        }
    }
}

impl Deck {
    /// Validate this deck against its investigator's contract.
    ///
    /// The investigator's rules run in declared order and the first
    /// failure is returned as-is. When all rules pass, the default rule
    /// applies: the non-permanent card count must equal the investigator's
    /// deck size exactly.
    #[must_use]
    pub fn validate(&self, investigator: &Investigator) -> ValidationResult {
        for option in &investigator.deck_options {
            let result = option.evaluate(self);
            if !result.is_valid {
                tracing::debug!(
                    "deck {} failed a legality rule: {:?}",
                    self.id.raw(),
                    result.message
                );
                return result;
            }
        }

        let count = self.non_permanent_count();
        if count < investigator.deck_size {
            ValidationResult::invalid("not enough cards")
        } else if count > investigator.deck_size {
            ValidationResult::invalid("too many cards")
        } else {
            ValidationResult::valid()
        }
    }
}
