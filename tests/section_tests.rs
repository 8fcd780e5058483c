//! Sort and sectioning tests over the full pipeline.

mod common;

use cardex::{
    Faction, FilterExpression, ResultSectioner, SortColumn, SortDirection, SortSpec,
};

use common::{catalog, ids, run_filter, run_sorted};

#[test]
fn faction_sections_follow_the_sort_order() {
    let catalog = catalog();
    let cards = run_filter(&catalog, &FilterExpression::new());

    let sections = ResultSectioner::new(SortColumn::Faction).section(cards);
    let labels: Vec<_> = sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Guardian", "Seeker", "Mystic", "Neutral"]);

    // Sections partition the sequence.
    let total: usize = sections.iter().map(|s| s.cards.len()).sum();
    assert_eq!(total, 10);
}

#[test]
fn name_sections_group_by_leading_letter() {
    let catalog = catalog();
    let sort = SortSpec::new().with(SortColumn::Name, SortDirection::Ascending);
    let cards = run_sorted(&catalog, &FilterExpression::new(), sort);

    let sections = ResultSectioner::new(SortColumn::Name).section(cards);
    let labels: Vec<_> = sections.iter().map(|s| s.label.as_str()).collect();

    // ".45 Automatic" opens the non-letter bucket.
    assert_eq!(labels[0], "#");
    assert_eq!(
        labels,
        ["#", "C", "D", "F", "L", "M", "P", "V", "W"]
    );
}

#[test]
fn level_sections_use_level_labels() {
    let catalog = catalog();
    let sort = SortSpec::new()
        .with(SortColumn::Level, SortDirection::Ascending)
        .with(SortColumn::Name, SortDirection::Ascending);
    let cards = run_sorted(
        &catalog,
        &FilterExpression::new().with_factions([Faction::Guardian]),
        sort,
    );

    let sections = ResultSectioner::new(SortColumn::Level).section(cards);
    let labels: Vec<_> = sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Level: 0", "Level: 5"]);
}

#[test]
fn slot_sections_put_slotless_cards_in_their_own_bucket() {
    let catalog = catalog();
    let sort = SortSpec::new().with(SortColumn::AssetSlot, SortDirection::Ascending);
    let cards = run_sorted(&catalog, &FilterExpression::new(), sort);

    let sections = ResultSectioner::new(SortColumn::AssetSlot).section(cards);
    let labels: Vec<_> = sections.iter().map(|s| s.label.as_str()).collect();

    assert_eq!(*labels.last().unwrap(), "Not an Asset");
    assert!(labels.contains(&"Hand"));
    assert!(labels.contains(&"Ally"));
}

#[test]
fn favorite_sections_label_the_favorite_run() {
    let catalog = catalog();
    let sort = SortSpec::new().with(SortColumn::Favorite, SortDirection::Descending);
    let cards = run_sorted(&catalog, &FilterExpression::new(), sort);

    let sections = ResultSectioner::new(SortColumn::Favorite).section(cards);
    assert_eq!(sections[0].label, "Favorites");
    assert_eq!(sections[0].cards.len(), 1);
    assert_eq!(sections[1].label, "Other");
}

#[test]
fn sectioning_is_idempotent_over_the_pipeline() {
    let catalog = catalog();
    let cards = run_filter(&catalog, &FilterExpression::new());

    let sectioner = ResultSectioner::new(SortColumn::Faction);
    let once = sectioner.section(cards);
    let flattened: Vec<_> = once
        .iter()
        .flat_map(|section| section.cards.iter().cloned())
        .collect();
    let twice = sectioner.section(flattened);

    assert_eq!(once, twice);
}

#[test]
fn reversing_every_direction_reverses_the_output() {
    let catalog = catalog();

    // All fixture names are distinct, so a name sort has no ties.
    let sort = SortSpec::new().with(SortColumn::Name, SortDirection::Ascending);
    let forward = run_sorted(&catalog, &FilterExpression::new(), sort.clone());
    let backward = run_sorted(&catalog, &FilterExpression::new(), sort.reversed());

    let mut reversed = ids(&backward);
    reversed.reverse();
    assert_eq!(ids(&forward), reversed);
}

#[test]
fn sectioner_follows_the_first_sort_column() {
    let spec = SortSpec::default();
    let sectioner = ResultSectioner::for_spec(&spec).unwrap();
    assert_eq!(sectioner.column(), SortColumn::Faction);

    assert!(ResultSectioner::for_spec(&SortSpec::new()).is_none());
}
