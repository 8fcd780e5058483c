//! Multi-column sort specifications.
//!
//! A `SortSpec` is an ordered list of `(column, direction)` pairs applied
//! lexicographically: compare on the first column, fall through to the next
//! on ties, and so on. Ties that survive every column keep their original
//! relative order (`slice::sort_by` is stable).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::Card;

/// A sortable card attribute.
///
/// Faction, type, pack, and level order by integer rank; name orders
/// lexicographically; a missing asset slot sorts after any present slot;
/// favorite orders false before true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Faction,
    Name,
    Level,
    Type,
    Pack,
    AssetSlot,
    Favorite,
}

/// Sort direction for one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flip the direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Ordered list of sort columns with directions.
///
/// ## Example
///
/// ```
/// use cardex::sort::{SortColumn, SortDirection, SortSpec};
///
/// let spec = SortSpec::new()
///     .with(SortColumn::Level, SortDirection::Descending)
///     .with(SortColumn::Name, SortDirection::Ascending);
///
/// assert_eq!(spec.columns().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    /// SmallVec keeps the usual handful of columns inline.
    columns: SmallVec<[(SortColumn, SortDirection); 6]>,
}

impl Default for SortSpec {
    /// The default order: faction, name, level, type, pack, asset slot,
    /// all ascending.
    fn default() -> Self {
        Self::new()
            .with(SortColumn::Faction, SortDirection::Ascending)
            .with(SortColumn::Name, SortDirection::Ascending)
            .with(SortColumn::Level, SortDirection::Ascending)
            .with(SortColumn::Type, SortDirection::Ascending)
            .with(SortColumn::Pack, SortDirection::Ascending)
            .with(SortColumn::AssetSlot, SortDirection::Ascending)
    }
}

impl SortSpec {
    /// Create an empty spec. An empty spec compares everything equal, so
    /// sorting with it preserves the input order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: SmallVec::new(),
        }
    }

    /// Append a column (builder pattern).
    #[must_use]
    pub fn with(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.columns.push((column, direction));
        self
    }

    /// The columns in application order.
    #[must_use]
    pub fn columns(&self) -> &[(SortColumn, SortDirection)] {
        &self.columns
    }

    /// The first column, which drives sectioning.
    #[must_use]
    pub fn first_column(&self) -> Option<SortColumn> {
        self.columns.first().map(|(column, _)| *column)
    }

    /// A copy with every column's direction flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(column, direction)| (*column, direction.reversed()))
                .collect(),
        }
    }

    /// Compare two cards lexicographically over the columns.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        for (column, direction) in &self.columns {
            let ordering = match direction {
                SortDirection::Ascending => compare_column(*column, a, b),
                SortDirection::Descending => compare_column(*column, a, b).reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable-sort a card slice in place.
    pub fn sort(&self, cards: &mut [Card]) {
        cards.sort_by(|a, b| self.compare(a, b));
    }
}

/// Ascending comparison on a single column.
fn compare_column(column: SortColumn, a: &Card, b: &Card) -> Ordering {
    match column {
        SortColumn::Faction => a.faction.rank().cmp(&b.faction.rank()),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Level => a.level.cmp(&b.level),
        // Rank order only; the upstream comparator that mixed a hash value
        // into the type rank is a known defect.
        SortColumn::Type => a.card_type.rank().cmp(&b.card_type.rank()),
        SortColumn::Pack => a.pack_position.cmp(&b.pack_position),
        SortColumn::AssetSlot => match (a.slot, b.slot) {
            (Some(left), Some(right)) => left.rank().cmp(&right.rank()),
            // Missing slot sorts after any present slot.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortColumn::Favorite => a.favorite.cmp(&b.favorite),
    }
}
