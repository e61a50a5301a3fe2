//! Unit tests for the `vocab_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical drill; different seeds → varied picks |
//! | Filter | Predicate agreement over a query grid; idempotence; order |
//! | Sampler | Length bound; no duplicates on large pools |
//! | Quiz | Four distinct options; one correct; prompt is the meaning |
//! | Export | CSV round-trip through the `csv` crate; header-only output |
//! | Generator | Fallback to catalog; browse cap; count clamp; config from JSON |
//! | Scenario | "piece of cake" search and export |

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::drill_engine::{
    filter, generate_drill, make_question, sample, to_delimited_text, Catalog, Category,
    DrillError, DrillMode, DrillOutcome, DrillRequest, Entry, FilterQuery, Level, Selector,
    BROWSE_LIMIT, MAX_SAMPLE_COUNT,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Build a seeded request for `mode` over the whole catalog.
fn req(mode: DrillMode, seed: u64) -> DrillRequest {
    DrillRequest::new(mode).with_seed(seed)
}

/// `n` synthetic entries with ids `1..=n`, cycling through levels.
fn synthetic_pool(n: u32) -> Vec<Entry> {
    (1..=n)
        .map(|i| {
            Entry::new(
                i,
                if i % 2 == 0 { Category::Idiom } else { Category::PhrasalVerb },
                format!("phrase {i}"),
                format!("meaning {i}"),
                format!("example {i}"),
                Level::ALL[i as usize % Level::ALL.len()],
            )
        })
        .collect()
}

fn ids(entries: &[Entry]) -> Vec<u32> {
    entries.iter().map(|e| e.id).collect()
}

fn piece_of_cake() -> Entry {
    Entry::new(
        1003,
        Category::Idiom,
        "piece of cake",
        "something very easy",
        "That test was a piece of cake.",
        Level::A2,
    )
}

/// Seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_drill() {
    let catalog = Catalog::builtin();
    for mode in [DrillMode::Browse, DrillMode::Random, DrillMode::Quiz, DrillMode::Flashcard] {
        let a = generate_drill(&catalog, &req(mode, 12345)).unwrap();
        let b = generate_drill(&catalog, &req(mode, 12345)).unwrap();
        assert_eq!(a.drill_id, b.drill_id, "drill_id mismatch for {mode:?}");
        assert_eq!(
            serde_json::to_value(&a.outcome).unwrap(),
            serde_json::to_value(&b.outcome).unwrap(),
            "outcome mismatch for {mode:?}"
        );
    }
}

#[test]
fn different_seeds_produce_varied_picks() {
    let catalog = Catalog::builtin();
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_drill(&catalog, &req(DrillMode::Random, seed)).unwrap();
        let b = generate_drill(&catalog, &req(DrillMode::Random, seed + 500)).unwrap();
        if serde_json::to_value(&a.outcome).unwrap() == serde_json::to_value(&b.outcome).unwrap() {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical samples ({same}/{pairs})");
}

#[test]
fn drill_ids_carry_mode_prefix() {
    let catalog = Catalog::builtin();
    let expected = [
        (DrillMode::Browse,    "BR-"),
        (DrillMode::Random,    "RN-"),
        (DrillMode::Quiz,      "QZ-"),
        (DrillMode::Flashcard, "FC-"),
    ];
    for (mode, prefix) in expected {
        let r = generate_drill(&catalog, &req(mode, 1)).unwrap();
        assert!(r.drill_id.starts_with(prefix), "ID '{}' for {mode:?}", r.drill_id);
        assert_eq!(r.drill_id.len(), prefix.len() + 8);
    }
}

#[test]
fn entropy_seed_produces_a_valid_drill() {
    let catalog = Catalog::builtin();
    let r = generate_drill(&catalog, &DrillRequest::new(DrillMode::Quiz)).unwrap();
    let DrillOutcome::Quiz { question } = r.outcome else {
        panic!("expected a quiz");
    };
    assert_eq!(question.options.len(), 4);
}

// ── filter ───────────────────────────────────────────────────────────────────

#[test]
fn filter_agrees_with_predicates_over_query_grid() {
    let catalog = Catalog::builtin();
    let queries = ["", "up", "THE", " cake ", "o", "zzz", "don't"];
    let mut types = vec![Selector::All];
    types.extend(Category::ALL.map(Selector::Only));
    let mut levels = vec![Selector::All];
    levels.extend(Level::ALL.map(Selector::Only));

    for q in queries {
        for t in &types {
            for l in &levels {
                let out: HashSet<u32> = ids(&filter(catalog.entries(), q, t, l)).into_iter().collect();
                let needle = q.trim().to_lowercase();
                for e in catalog.entries() {
                    let expected = t.accepts(&e.category)
                        && l.accepts(&e.level)
                        && (needle.is_empty()
                            || e.phrase.to_lowercase().contains(&needle)
                            || e.meaning.to_lowercase().contains(&needle)
                            || e.example.to_lowercase().contains(&needle));
                    assert_eq!(out.contains(&e.id), expected, "entry {} q={q:?} t={t} l={l}", e.id);
                }
            }
        }
    }
}

#[test]
fn filter_is_idempotent_and_order_preserving() {
    let catalog = Catalog::builtin();
    let t = Selector::Only(Category::PhrasalVerb);
    let once = filter(catalog.entries(), "a", &t, &Selector::All);
    let twice = filter(&once, "a", &t, &Selector::All);
    assert_eq!(once, twice);

    let positions: Vec<usize> = once
        .iter()
        .map(|e| catalog.entries().iter().position(|c| c.id == e.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "order changed: {positions:?}");
}

// ── sampler ──────────────────────────────────────────────────────────────────

#[test]
fn sample_length_is_min_of_count_and_pool() {
    for pool_size in [1u32, 3, 14, 30] {
        let pool = synthetic_pool(pool_size);
        for count in [1usize, 2, 5, 20, 50] {
            let mut rng = StdRng::seed_from_u64(count as u64 * 31 + pool_size as u64);
            let picks = sample(&mut rng, &pool, count).unwrap();
            assert_eq!(picks.len(), count.min(pool.len()), "pool={pool_size} count={count}");
        }
    }
}

#[test]
fn sample_has_no_duplicates_on_large_pools() {
    let pool = synthetic_pool(40);
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picks = sample(&mut rng, &pool, 12).unwrap();
        let unique: HashSet<u32> = picks.iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), picks.len(), "duplicate in sample for seed={seed}");
    }
}

#[test]
fn sample_reaches_every_entry() {
    let pool = synthetic_pool(12);
    let mut seen = HashSet::new();
    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        seen.extend(sample(&mut rng, &pool, 1).unwrap().iter().map(|e| e.id));
    }
    assert_eq!(seen.len(), pool.len());
}

// ── quiz ─────────────────────────────────────────────────────────────────────

#[test]
fn quiz_options_are_distinct_with_single_correct() {
    let pool = synthetic_pool(25);
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let q = make_question(&mut rng, &pool).unwrap();
        let option_ids: HashSet<u32> = q.options.iter().map(|e| e.id).collect();
        assert_eq!(option_ids.len(), 4, "seed={seed}");
        assert_eq!(q.options.iter().filter(|e| e.id == q.correct_id).count(), 1);
        assert_eq!(q.prompt, format!("meaning {}", q.correct_id));
    }
}

#[test]
fn quiz_over_filtered_pool_only_uses_pool() {
    let catalog = Catalog::builtin();
    let pool = filter(catalog.entries(), "", &Selector::Only(Category::Idiom), &Selector::All);
    assert_eq!(pool.len(), 4);
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let q = make_question(&mut rng, &pool).unwrap();
        assert!(q.options.iter().all(|e| e.category == Category::Idiom));
    }
}

#[test]
fn quiz_on_too_small_filtered_pool_fails_without_hanging() {
    let catalog = Catalog::builtin();
    // Two idioms at A2.
    let request = req(DrillMode::Quiz, 3).with_filter(
        FilterQuery::all().with_category(Category::Idiom).with_level(Level::A2),
    );
    let err = generate_drill(&catalog, &request).unwrap_err();
    assert!(matches!(err, DrillError::InsufficientPool { distinct: 2, required: 4 }));
}

// ── export ───────────────────────────────────────────────────────────────────

#[test]
fn export_round_trips_through_csv_parser() {
    let tricky = Entry::new(
        77,
        Category::PhrasalVerb,
        "say \"cheese\", please",
        "smile,\nfor a photo",
        "\"\"",
        Level::C1,
    );
    let mut entries = Catalog::builtin().entries().to_vec();
    entries.push(tricky);
    let text = to_delimited_text(&entries);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(header, vec!["Type", "Phrase", "Meaning", "Example", "Level"]);

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(rows.len(), entries.len());
    for (row, e) in rows.iter().zip(&entries) {
        let expected = vec![
            e.category.to_string(),
            e.phrase.clone(),
            e.meaning.clone(),
            e.example.clone(),
            e.level.to_string(),
        ];
        assert_eq!(row, &expected);
    }
}

#[test]
fn export_of_nothing_is_header_only() {
    let text = to_delimited_text(&[]);
    assert_eq!(text.lines().count(), 1);
    assert_eq!(text.replace('"', ""), "Type,Phrase,Meaning,Example,Level");
}

// ── generator ────────────────────────────────────────────────────────────────

#[test]
fn unmatched_filter_falls_back_to_catalog() {
    let catalog = Catalog::builtin();
    let request = req(DrillMode::Random, 5).with_filter(FilterQuery::search("no such phrase"));
    let r = generate_drill(&catalog, &request).unwrap();
    assert_eq!(r.matched, 0);
    assert!(r.used_fallback);
    let DrillOutcome::Random { picks } = r.outcome else {
        panic!("expected picks");
    };
    assert_eq!(picks.len(), 5);
}

#[test]
fn browse_does_not_fall_back() {
    let catalog = Catalog::builtin();
    let request = req(DrillMode::Browse, 5).with_filter(FilterQuery::search("no such phrase"));
    let r = generate_drill(&catalog, &request).unwrap();
    assert!(!r.used_fallback);
    let DrillOutcome::Browse { total, items } = r.outcome else {
        panic!("expected browse");
    };
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[test]
fn browse_is_capped() {
    let catalog = Catalog::new(synthetic_pool(75)).unwrap();
    let r = generate_drill(&catalog, &req(DrillMode::Browse, 1)).unwrap();
    let DrillOutcome::Browse { total, items } = r.outcome else {
        panic!("expected browse");
    };
    assert_eq!(total, 75);
    assert_eq!(items.len(), BROWSE_LIMIT);
    assert_eq!(ids(&items), (1..=BROWSE_LIMIT as u32).collect::<Vec<_>>());
}

#[test]
fn count_is_clamped_and_zero_rejected() {
    let catalog = Catalog::new(synthetic_pool(40)).unwrap();
    let r = generate_drill(&catalog, &req(DrillMode::Random, 2).with_count(500)).unwrap();
    let DrillOutcome::Random { picks } = r.outcome else {
        panic!("expected picks");
    };
    assert_eq!(picks.len(), MAX_SAMPLE_COUNT);

    let err = generate_drill(&catalog, &req(DrillMode::Random, 2).with_count(0)).unwrap_err();
    assert!(matches!(err, DrillError::InvalidCount(0)));
}

#[test]
fn request_loads_from_json_with_defaults() {
    let request = DrillRequest::from_json(r#"{ "mode": "quiz", "rng_seed": 8 }"#).unwrap();
    assert_eq!(request.mode, DrillMode::Quiz);
    assert_eq!(request.count, 5);
    assert_eq!(request.filter, FilterQuery::all());
    assert_eq!(request.rng_seed, Some(8));

    let filtered = DrillRequest::from_json(
        r#"{ "mode": "random", "filter": { "query": "up", "category": { "only": "phrasal_verb" } } }"#,
    )
    .unwrap();
    assert_eq!(filtered.filter.category, Selector::Only(Category::PhrasalVerb));
    assert_eq!(filtered.filter.level, Selector::All);

    assert!(matches!(DrillRequest::from_json("{ not json"), Err(DrillError::Json(_))));
}

#[test]
fn selectors_parse_from_text() {
    assert_eq!("all".parse::<Selector<Level>>().unwrap(), Selector::All);
    assert_eq!("b2".parse::<Selector<Level>>().unwrap(), Selector::Only(Level::B2));
    assert_eq!("phrasal".parse::<Selector<Category>>().unwrap(), Selector::Only(Category::PhrasalVerb));
    assert_eq!("Idiom".parse::<Category>().unwrap(), Category::Idiom);
    assert_eq!(" PHRASAL ".parse::<Selector<Category>>().unwrap(), Selector::Only(Category::PhrasalVerb));
    assert_eq!("ALL".parse::<Selector<Category>>().unwrap(), Selector::All);
    assert!(matches!("verb".parse::<Category>(), Err(DrillError::UnknownCategory(_))));
    assert!(matches!("D4".parse::<Level>(), Err(DrillError::UnknownLevel(_))));
}

// ── concrete scenario ────────────────────────────────────────────────────────

#[test]
fn piece_of_cake_search_and_export() {
    let catalog = Catalog::builtin();
    let found = filter(catalog.entries(), "piece", &Selector::All, &Selector::All);
    assert_eq!(found, vec![piece_of_cake()]);

    assert_eq!(
        to_delimited_text(&found),
        "\"Type\",\"Phrase\",\"Meaning\",\"Example\",\"Level\"\n\
         \"idiom\",\"piece of cake\",\"something very easy\",\"That test was a piece of cake.\",\"A2\""
    );
}
