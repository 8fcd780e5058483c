//! Benchmarks for the query pipeline and the card cache.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cardex::{
    Card, CardId, CardRecord, CardType, Catalog, Faction, FilterExpression, LruCache,
    MemoryCatalog, Pack, PackId, QueryCompiler, ResultSectioner, Skills, SortColumn, SortSpec,
};

const FACTIONS: [Faction; 5] = [
    Faction::Guardian,
    Faction::Seeker,
    Faction::Rogue,
    Faction::Mystic,
    Faction::Survivor,
];

fn synthetic_catalog(cards: u32) -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new(cards as usize);
    catalog.add_pack(Pack::new(PackId::new(1), "Core Set", 1));

    for i in 0..cards {
        let faction = FACTIONS[(i % 5) as usize];
        catalog.add_record(
            CardRecord::new(
                CardId::new(i + 1),
                format!("Card {:04}", i),
                CardType::Asset,
                faction,
            )
            .in_pack(PackId::new(1))
            .with_level((i % 6) as u8)
            .with_skills(Skills::new((i % 2) as u8, 0, (i % 3) as u8, 0, 0))
            .with_traits(["Item"])
            .with_text("Benchmark card text with a handful of searchable words."),
        );
    }
    catalog
}

fn bench_query_pipeline(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);
    let filter = FilterExpression::new()
        .with_factions([Faction::Guardian])
        .with_levels([0, 1, 2])
        .or(FilterExpression::new().with_traits(["Item"]));

    c.bench_function("compile_filter", |b| {
        b.iter(|| {
            QueryCompiler::new(&catalog)
                .compile(black_box(&filter), SortSpec::default())
                .unwrap()
        })
    });

    let query = QueryCompiler::new(&catalog)
        .compile(&filter, SortSpec::default())
        .unwrap();
    c.bench_function("query_500_cards", |b| {
        b.iter(|| catalog.query_cards(black_box(&query)).unwrap())
    });

    let cards = catalog.query_cards(&query).unwrap();
    c.bench_function("section_results", |b| {
        b.iter(|| {
            ResultSectioner::new(SortColumn::Faction).section(black_box(cards.clone()))
        })
    });
}

fn bench_card_cache(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);
    let pack = Pack::new(PackId::new(1), "Core Set", 1);

    c.bench_function("cache_hit", |b| {
        let cache: LruCache<CardId, Card> = LruCache::new(64);
        let card = CardRecord::new(CardId::new(1), "Hit", CardType::Asset, Faction::Neutral)
            .materialize(&pack);
        cache.set(card.id, card.clone());
        b.iter(|| cache.get(black_box(&card.id)))
    });

    c.bench_function("resolve_through_cache", |b| {
        b.iter(|| catalog.resolve_card(black_box(CardId::new(42))).unwrap())
    });
}

criterion_group!(benches, bench_query_pipeline, bench_card_cache);
criterion_main!(benches);
