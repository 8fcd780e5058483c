//! Shared test fixtures: a small but representative catalog.

#![allow(dead_code)]

use cardex::{
    AssetSlot, Card, CardId, CardRecord, CardType, Catalog, Faction, FilterExpression,
    Investigator, InvestigatorId, MemoryCatalog, Pack, PackId, QueryCompiler, Skills, SortSpec,
    Subtype,
};

pub const CORE: PackId = PackId::new(1);
pub const DUNWICH: PackId = PackId::new(2);
pub const ROLAND: InvestigatorId = InvestigatorId::new(1);

/// Catalog with two packs, one investigator, and ten cards spread over
/// factions, levels, types, and slots.
pub fn catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new(64);

    catalog.add_pack(Pack::new(CORE, "Core Set", 1));
    catalog.add_pack(Pack::new(DUNWICH, "The Dunwich Legacy", 2));

    catalog.add_investigator(Investigator::new(
        ROLAND,
        "Roland Banks",
        Faction::Guardian,
        30,
    ));

    catalog.add_record(
        CardRecord::new(CardId::new(1), "Machete", CardType::Asset, Faction::Guardian)
            .in_pack(CORE)
            .with_cost(3)
            .with_slot(AssetSlot::Hand)
            .with_skills(Skills::new(0, 0, 1, 0, 0))
            .with_traits(["Item", "Weapon", "Melee"])
            .with_text("You get +1 Combat while attacking the only enemy engaged with you."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(2), "Vicious Blow", CardType::Skill, Faction::Guardian)
            .in_pack(CORE)
            .with_skills(Skills::new(0, 0, 1, 0, 0))
            .with_traits(["Practiced"])
            .with_text("If this skill test is successful during an attack, deal +1 damage."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(3), "Lightning Gun", CardType::Asset, Faction::Guardian)
            .in_pack(DUNWICH)
            .with_cost(6)
            .with_level(5)
            .with_slot(AssetSlot::TwoHands)
            .with_skills(Skills::new(0, 0, 1, 0, 0))
            .with_traits(["Item", "Weapon", "Firearm"])
            .with_text("Uses (3 ammo)."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(4), "Deduction", CardType::Skill, Faction::Seeker)
            .in_pack(CORE)
            .with_skills(Skills::new(0, 1, 0, 0, 0))
            .with_traits(["Practiced"])
            .with_text("If this skill test is successful while investigating, discover +1 clue."),
    );
    catalog.add_record(
        CardRecord::new(
            CardId::new(5),
            "Dr. Milan Christopher",
            CardType::Asset,
            Faction::Seeker,
        )
        .in_pack(CORE)
        .with_cost(4)
        .with_slot(AssetSlot::Ally)
        .with_skills(Skills::new(0, 1, 0, 0, 0))
        .with_health_sanity(1, 2)
        .with_traits(["Ally", "Miskatonic"])
        .unique()
        .with_text("You get +1 Intellect. After you investigate, gain 1 resource."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(6), "Wither", CardType::Event, Faction::Mystic)
            .in_pack(DUNWICH)
            .with_cost(0)
            .with_skills(Skills::new(1, 0, 1, 0, 0))
            .with_traits(["Spell"])
            .with_text("Uses (4 charges). Spend 1 charge: Fight."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(7), "Flashlight", CardType::Asset, Faction::Neutral)
            .in_pack(CORE)
            .with_cost(2)
            .with_slot(AssetSlot::Hand)
            .with_traits(["Item", "Tool"])
            .favorite()
            .with_text("Uses (3 supplies). Spend 1 supply: Investigate."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(8), "Paranoia", CardType::Treachery, Faction::Neutral)
            .in_pack(CORE)
            .with_subtype(Subtype::BasicWeakness)
            .with_text("Revelation - Lose all resources."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(9), "Charisma", CardType::Asset, Faction::Neutral)
            .in_pack(DUNWICH)
            .with_cost(3)
            .permanent()
            .earnable()
            .with_traits(["Talent"])
            .with_text("You may have 1 additional Ally asset in play."),
    );
    catalog.add_record(
        CardRecord::new(CardId::new(10), ".45 Automatic", CardType::Asset, Faction::Guardian)
            .in_pack(CORE)
            .with_cost(4)
            .with_slot(AssetSlot::Hand)
            .with_skills(Skills::new(0, 0, 0, 1, 0))
            .with_traits(["Item", "Weapon", "Firearm"])
            .with_text("Uses (4 ammo)."),
    );

    catalog.set_investigator_cards(ROLAND, [CardId::new(1), CardId::new(2)]);
    catalog
}

/// Compile and run a filter with the default sort.
pub fn run_filter(catalog: &MemoryCatalog, filter: &FilterExpression) -> Vec<Card> {
    run_sorted(catalog, filter, SortSpec::default())
}

/// Compile and run a filter with an explicit sort.
pub fn run_sorted(catalog: &MemoryCatalog, filter: &FilterExpression, sort: SortSpec) -> Vec<Card> {
    let query = QueryCompiler::new(catalog)
        .compile(filter, sort)
        .expect("compile should succeed");
    catalog.query_cards(&query).expect("query should succeed")
}

/// Card ids of a result, in result order.
pub fn ids(cards: &[Card]) -> Vec<u32> {
    cards.iter().map(|card| card.id.raw()).collect()
}

/// Resolve one card from the catalog.
pub fn resolve(catalog: &MemoryCatalog, id: u32) -> Card {
    catalog
        .resolve_card(CardId::new(id))
        .expect("fixture card should resolve")
}
