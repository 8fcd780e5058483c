//! Card value objects - immutable card data.
//!
//! `Card` holds the attributes of one physical game card: name, cost,
//! level, type, faction, skill icons, traits, and flags. Cards are
//! materialized once by the catalog store from a raw [`CardRecord`] and are
//! immutable afterwards.
//!
//! Identity is the card id: equality, ordering, and hashing all use the id
//! alone.
//!
//! [`CardRecord`]: crate::catalog::CardRecord

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pack::PackId;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card faction. The declaration order is the sort rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Guardian,
    Seeker,
    Rogue,
    Mystic,
    Survivor,
    Neutral,
    Mythos,
}

impl Faction {
    /// Sort rank of this faction.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Guardian => "Guardian",
            Faction::Seeker => "Seeker",
            Faction::Rogue => "Rogue",
            Faction::Mystic => "Mystic",
            Faction::Survivor => "Survivor",
            Faction::Neutral => "Neutral",
            Faction::Mythos => "Mythos",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card type. The declaration order is the sort rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Asset,
    Event,
    Skill,
    Treachery,
    Enemy,
}

impl CardType {
    /// Sort rank of this card type.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Asset => "Asset",
            CardType::Event => "Event",
            CardType::Skill => "Skill",
            CardType::Treachery => "Treachery",
            CardType::Enemy => "Enemy",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Weakness tag carried by some cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subtype {
    Weakness,
    BasicWeakness,
}

impl Subtype {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Subtype::Weakness => "Weakness",
            Subtype::BasicWeakness => "Basic Weakness",
        }
    }
}

/// Slot occupied by an asset while in play. The declaration order is the
/// sort rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetSlot {
    Hand,
    TwoHands,
    Arcane,
    TwoArcane,
    Accessory,
    Body,
    Ally,
    Tarot,
}

impl AssetSlot {
    /// Sort rank of this slot.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AssetSlot::Hand => "Hand",
            AssetSlot::TwoHands => "Two Hands",
            AssetSlot::Arcane => "Arcane",
            AssetSlot::TwoArcane => "Two Arcane",
            AssetSlot::Accessory => "Accessory",
            AssetSlot::Body => "Body",
            AssetSlot::Ally => "Ally",
            AssetSlot::Tarot => "Tarot",
        }
    }
}

impl std::fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the five skill icons a card can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillIcon {
    Willpower,
    Intellect,
    Combat,
    Agility,
    Wild,
}

impl SkillIcon {
    /// All five icons, in declaration order.
    pub const ALL: [SkillIcon; 5] = [
        SkillIcon::Willpower,
        SkillIcon::Intellect,
        SkillIcon::Combat,
        SkillIcon::Agility,
        SkillIcon::Wild,
    ];
}

/// Per-icon skill values of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub willpower: u8,
    pub intellect: u8,
    pub combat: u8,
    pub agility: u8,
    pub wild: u8,
}

impl Skills {
    /// Create a skill block from the five icon values.
    #[must_use]
    pub const fn new(willpower: u8, intellect: u8, combat: u8, agility: u8, wild: u8) -> Self {
        Self {
            willpower,
            intellect,
            combat,
            agility,
            wild,
        }
    }

    /// Get the value for one icon.
    #[must_use]
    pub const fn get(&self, icon: SkillIcon) -> u8 {
        match icon {
            SkillIcon::Willpower => self.willpower,
            SkillIcon::Intellect => self.intellect,
            SkillIcon::Combat => self.combat,
            SkillIcon::Agility => self.agility,
            SkillIcon::Wild => self.wild,
        }
    }
}

/// Combat statistics of an enemy card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub fight: u8,
    pub evade: u8,
    pub health: u8,
    pub damage: u8,
    pub horror: u8,
}

/// An immutable card.
///
/// Constructed by the catalog store from a [`CardRecord`]; the pack name
/// and position are denormalized onto the card at that point so sorting and
/// sectioning never need catalog access.
///
/// [`CardRecord`]: crate::catalog::CardRecord
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier; the card's whole identity.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Resource cost to play.
    pub cost: u8,

    /// Experience level, 0 through 5.
    pub level: u8,

    /// Card type.
    pub card_type: CardType,

    /// Weakness tag, if any.
    pub subtype: Option<Subtype>,

    /// Faction the card belongs to.
    pub faction: Faction,

    /// Rules text.
    pub text: String,

    /// Pack the card was printed in.
    pub pack: PackId,

    /// Pack display name.
    pub pack_name: String,

    /// Pack catalog position, used as the pack sort rank.
    pub pack_position: u32,

    /// Slot occupied while in play; `None` for non-assets.
    pub slot: Option<AssetSlot>,

    /// The five skill icon values.
    pub skills: Skills,

    /// Health, for cards that soak damage.
    pub health: u8,

    /// Sanity, for cards that soak horror.
    pub sanity: u8,

    /// Trait words printed on the card.
    pub traits: FxHashSet<String>,

    /// At most one copy per deck.
    pub unique: bool,

    /// Card has a printed back face.
    pub double_sided: bool,

    /// Permanent cards sit outside the deck count.
    pub permanent: bool,

    /// Card can be earned as an upgrade reward.
    pub earnable: bool,

    /// User favorite flag.
    pub favorite: bool,

    /// Card carries a deck-building restriction.
    pub restricted: bool,

    /// Enemy statistics; `None` for non-enemies.
    pub enemy: Option<EnemyStats>,
}

impl Card {
    /// Get the skill value for one icon.
    #[must_use]
    pub fn skill(&self, icon: SkillIcon) -> u8 {
        self.skills.get(icon)
    }

    /// Check if the card carries a trait word.
    #[must_use]
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.contains(name)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}
