//! Result sectioning.
//!
//! `ResultSectioner` groups a pre-sorted card sequence into labeled
//! sections: each section is a maximal contiguous run that agrees under the
//! grouping rule for the first sort column. The grouping rule can be
//! coarser than value equality - name sectioning groups by leading letter,
//! not the whole string.
//!
//! Sectioning is one linear pass; a boundary falls exactly where the rule
//! between consecutive cards stops holding.

use serde::{Deserialize, Serialize};

use super::spec::{SortColumn, SortSpec};
use crate::catalog::Card;

/// A labeled contiguous run of sorted cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Display label for the run.
    pub label: String,
    /// The cards, in their sorted order.
    pub cards: Vec<Card>,
}

/// Groups sorted results into sections by one column.
#[derive(Clone, Copy, Debug)]
pub struct ResultSectioner {
    column: SortColumn,
}

impl ResultSectioner {
    /// Create a sectioner for a column.
    #[must_use]
    pub fn new(column: SortColumn) -> Self {
        Self { column }
    }

    /// Create a sectioner for a spec's first column, if it has one.
    #[must_use]
    pub fn for_spec(spec: &SortSpec) -> Option<Self> {
        spec.first_column().map(Self::new)
    }

    /// The grouping column.
    #[must_use]
    pub fn column(&self) -> SortColumn {
        self.column
    }

    /// Split a sorted sequence into labeled sections.
    pub fn section(&self, cards: Vec<Card>) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();

        for card in cards {
            let extends_run = sections
                .last()
                .and_then(|section| section.cards.last())
                .is_some_and(|prev| same_section(self.column, prev, &card));

            if extends_run {
                if let Some(section) = sections.last_mut() {
                    section.cards.push(card);
                }
            } else {
                sections.push(Section {
                    label: label(self.column, &card),
                    cards: vec![card],
                });
            }
        }
        sections
    }
}

/// Grouping rule: do two consecutive cards share a section?
fn same_section(column: SortColumn, a: &Card, b: &Card) -> bool {
    match column {
        // Leading letter, not the whole name.
        SortColumn::Name => leading_letter(&a.name) == leading_letter(&b.name),
        SortColumn::Faction => a.faction == b.faction,
        SortColumn::Level => a.level == b.level,
        SortColumn::Type => a.card_type == b.card_type,
        SortColumn::Pack => a.pack == b.pack,
        SortColumn::AssetSlot => a.slot == b.slot,
        SortColumn::Favorite => a.favorite == b.favorite,
    }
}

/// Display label for the section a card opens.
fn label(column: SortColumn, card: &Card) -> String {
    match column {
        SortColumn::Name => leading_letter(&card.name).to_string(),
        SortColumn::Faction => card.faction.name().to_string(),
        SortColumn::Level => format!("Level: {}", card.level),
        SortColumn::Type => card.card_type.name().to_string(),
        SortColumn::Pack => card.pack_name.clone(),
        SortColumn::AssetSlot => card
            .slot
            .map_or_else(|| "Not an Asset".to_string(), |slot| slot.name().to_string()),
        SortColumn::Favorite => {
            if card.favorite {
                "Favorites".to_string()
            } else {
                "Other".to_string()
            }
        }
    }
}

/// Uppercase leading letter of a name, or `#` when the name does not start
/// with a letter.
fn leading_letter(name: &str) -> char {
    name.chars()
        .next()
        .filter(|c| c.is_alphabetic())
        .map_or('#', |c| c.to_ascii_uppercase())
}
