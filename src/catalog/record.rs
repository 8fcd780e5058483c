//! Raw card rows, as handed over by the ingestion side.
//!
//! A `CardRecord` is the un-denormalized form of a card: it references its
//! pack by id only. The catalog store materializes records into [`Card`]
//! values, resolving the pack reference and stamping the pack name and
//! position onto the card.
//!
//! ## Example
//!
//! ```
//! use cardex::catalog::{AssetSlot, CardId, CardRecord, CardType, Faction, Pack, PackId, Skills};
//!
//! let core = Pack::new(PackId::new(1), "Core Set", 1);
//! let machete = CardRecord::new(CardId::new(1), "Machete", CardType::Asset, Faction::Guardian)
//!     .with_cost(3)
//!     .with_slot(AssetSlot::Hand)
//!     .with_skills(Skills::new(0, 0, 1, 0, 0))
//!     .with_traits(["Item", "Weapon", "Melee"])
//!     .materialize(&core);
//!
//! assert_eq!(machete.pack_name, "Core Set");
//! assert!(machete.has_trait("Weapon"));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{AssetSlot, Card, CardId, CardType, EnemyStats, Faction, Skills, Subtype};
use super::pack::{Pack, PackId};

/// A raw card row.
///
/// Built with the `with_*` methods and turned into a [`Card`] via
/// [`materialize`](CardRecord::materialize).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub name: String,
    pub cost: u8,
    pub level: u8,
    pub card_type: CardType,
    pub subtype: Option<Subtype>,
    pub faction: Faction,
    pub text: String,
    /// Pack reference, resolved at materialization.
    pub pack: PackId,
    pub slot: Option<AssetSlot>,
    pub skills: Skills,
    pub health: u8,
    pub sanity: u8,
    pub traits: FxHashSet<String>,
    pub unique: bool,
    pub double_sided: bool,
    pub permanent: bool,
    pub earnable: bool,
    pub favorite: bool,
    pub restricted: bool,
    pub enemy: Option<EnemyStats>,
}

impl CardRecord {
    /// Create a minimal record. The pack reference defaults to pack 0 and
    /// is normally set with [`in_pack`](CardRecord::in_pack).
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        card_type: CardType,
        faction: Faction,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost: 0,
            level: 0,
            card_type,
            subtype: None,
            faction,
            text: String::new(),
            pack: PackId::new(0),
            slot: None,
            skills: Skills::default(),
            health: 0,
            sanity: 0,
            traits: FxHashSet::default(),
            unique: false,
            double_sided: false,
            permanent: false,
            earnable: false,
            favorite: false,
            restricted: false,
            enemy: None,
        }
    }

    /// Set the pack reference (builder pattern).
    #[must_use]
    pub fn in_pack(mut self, pack: PackId) -> Self {
        self.pack = pack;
        self
    }

    /// Set the resource cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u8) -> Self {
        self.cost = cost;
        self
    }

    /// Set the experience level (builder pattern). Levels run 0 through 5.
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        debug_assert!(level <= 5, "card levels run 0 through 5");
        self.level = level;
        self
    }

    /// Set the weakness tag (builder pattern).
    #[must_use]
    pub fn with_subtype(mut self, subtype: Subtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the asset slot (builder pattern).
    #[must_use]
    pub fn with_slot(mut self, slot: AssetSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Set the skill icon values (builder pattern).
    #[must_use]
    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    /// Set health and sanity (builder pattern).
    #[must_use]
    pub fn with_health_sanity(mut self, health: u8, sanity: u8) -> Self {
        self.health = health;
        self.sanity = sanity;
        self
    }

    /// Set the trait words (builder pattern).
    #[must_use]
    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the card unique (builder pattern).
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark the card double-sided (builder pattern).
    #[must_use]
    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Mark the card permanent (builder pattern).
    #[must_use]
    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }

    /// Mark the card earnable (builder pattern).
    #[must_use]
    pub fn earnable(mut self) -> Self {
        self.earnable = true;
        self
    }

    /// Mark the card a user favorite (builder pattern).
    #[must_use]
    pub fn favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Mark the card as carrying a deck-building restriction (builder
    /// pattern).
    #[must_use]
    pub fn restricted(mut self) -> Self {
        self.restricted = true;
        self
    }

    /// Set the enemy statistics (builder pattern).
    #[must_use]
    pub fn with_enemy(mut self, enemy: EnemyStats) -> Self {
        self.enemy = Some(enemy);
        self
    }

    /// Materialize the record into an immutable [`Card`].
    ///
    /// `pack` must be the pack this record references; the store resolves
    /// it and reports a dangling reference before calling this.
    #[must_use]
    pub fn materialize(&self, pack: &Pack) -> Card {
        Card {
            id: self.id,
            name: self.name.clone(),
            cost: self.cost,
            level: self.level,
            card_type: self.card_type,
            subtype: self.subtype,
            faction: self.faction,
            text: self.text.clone(),
            pack: pack.id,
            pack_name: pack.name.clone(),
            pack_position: pack.position,
            slot: self.slot,
            skills: self.skills,
            health: self.health,
            sanity: self.sanity,
            traits: self.traits.clone(),
            unique: self.unique,
            double_sided: self.double_sided,
            permanent: self.permanent,
            earnable: self.earnable,
            favorite: self.favorite,
            restricted: self.restricted,
            enemy: self.enemy,
        }
    }
}
