use std::collections::HashSet;
use std::sync::Arc;

use namesake_core::name::{
    ALPHABET, DecadeLabel, Gender, GenerationRequest, MAX_BATCH_SIZE, MIN_BATCH_SIZE,
    NameGenerator, NameTable, Nationality, starts_with_letter,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

const DECADES: [&str; 3] = ["1980", "1990", "2000"];

/// 40 first names per bucket with varied initials, 60 last names per
/// nationality covering the whole alphabet.
fn rich_table() -> NameTable {
    let mut table = NameTable::new();
    for nationality in Nationality::iter() {
        for gender in Gender::iter() {
            for decade in DECADES {
                let names: Vec<String> = (0..40)
                    .map(|i| {
                        let initial = ALPHABET[i % ALPHABET.len()].to_ascii_uppercase();
                        format!("{initial}{gender}{decade}n{i}")
                    })
                    .collect();
                table = table.with_first_names(nationality, gender, decade, names);
            }
        }
        let last: Vec<String> = (0..60)
            .map(|i| {
                let initial = ALPHABET[i % ALPHABET.len()].to_ascii_uppercase();
                format!("{initial}{nationality}{i}")
            })
            .collect();
        table = table.with_last_names(nationality, last);
    }
    table
}

fn generator(seed: u64) -> NameGenerator {
    NameGenerator::with_rng(Arc::new(rich_table()), StdRng::seed_from_u64(seed))
}

#[test]
fn first_names_come_from_the_requested_pool() {
    let table = rich_table();
    let mut generator = generator(1);
    for nationality in Nationality::iter() {
        for gender in Gender::iter() {
            for decade in DECADES {
                let decade = DecadeLabel::decade(decade);
                let pool: HashSet<String> = table
                    .first_names_for(gender, nationality, &decade)
                    .into_iter()
                    .collect();
                let request = GenerationRequest::new(gender, nationality, decade.clone());
                let name = generator.generate(&request).expect("pool is large");
                assert!(pool.contains(&name.first_name), "{name:?}");

                let double = generator
                    .generate(&request.clone().with_double_name(true))
                    .expect("pool is large");
                let parts: Vec<&str> = double.first_name.split('-').collect();
                assert_eq!(parts.len(), 2);
                assert!(parts.iter().all(|p| pool.contains(*p)), "{double:?}");
            }
        }
    }
}

#[test]
fn alliteration_matches_first_component() {
    let mut generator = generator(2);
    for double in [false, true] {
        let request =
            GenerationRequest::new(Gender::Female, Nationality::British, DecadeLabel::Any)
                .with_alliteration(true)
                .with_double_name(double);
        for _ in 0..20 {
            if let Some(name) = generator.generate(&request) {
                let initial = name.first_name.chars().next().unwrap();
                assert!(starts_with_letter(&name.last_name, initial), "{name:?}");
            }
        }
    }
}

#[test]
fn recency_sets_stay_bounded() {
    let mut generator = generator(3);
    let request = GenerationRequest::new(Gender::Male, Nationality::German, DecadeLabel::Any);
    for _ in 0..300 {
        generator.generate(&request);
        assert!(generator.recency().first_len() <= 100);
        assert!(generator.recency().last_len() <= 100);
    }
}

#[test]
fn batch_reaches_target_size_and_is_sorted() {
    let mut generator = generator(4);
    let request = GenerationRequest::new(Gender::Diverse, Nationality::German, "1990");
    let batch = generator.generate_batch(&request);

    assert!(batch.len() >= MIN_BATCH_SIZE, "only {} names", batch.len());
    assert!(batch.len() <= MAX_BATCH_SIZE);
    let keys: Vec<String> = batch.iter().map(|n| n.last_name.to_lowercase()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn batches_never_exceed_alphabet_over_repeated_calls() {
    let mut generator = generator(5);
    let request = GenerationRequest::new(Gender::Female, Nationality::German, DecadeLabel::Any);
    for _ in 0..5 {
        assert!(generator.generate_batch(&request).len() <= MAX_BATCH_SIZE);
    }
}

#[test]
fn plain_request_yields_one_of_four_pairs() {
    let table = NameTable::new()
        .with_first_names(Nationality::German, Gender::Female, "1990", ["Anna", "Lena"])
        .with_last_names(Nationality::German, ["Bauer", "Klein"]);
    let allowed = ["Anna Bauer", "Anna Klein", "Lena Bauer", "Lena Klein"];
    for seed in 0..10 {
        let mut generator =
            NameGenerator::with_rng(Arc::new(table.clone()), StdRng::seed_from_u64(seed));
        let request = GenerationRequest::new(Gender::Female, Nationality::German, "1990");
        let name = generator.generate(&request).unwrap();
        assert!(allowed.contains(&name.full_name().as_str()));
    }
}

#[test]
fn alliteration_example_without_matching_last_name_is_absent() {
    let table = NameTable::new()
        .with_first_names(Nationality::German, Gender::Female, "1990", ["Anna"])
        .with_last_names(Nationality::German, ["Bauer", "Klein"]);
    let mut generator = NameGenerator::with_rng(Arc::new(table), StdRng::seed_from_u64(0));
    let request =
        GenerationRequest::new(Gender::Female, Nationality::German, "1990").with_alliteration(true);
    assert!(generator.generate(&request).is_none());
}

#[test]
fn identical_tables_give_identical_pools() {
    let a = rich_table();
    let b = rich_table();
    assert_eq!(a, b);
    assert_eq!(
        a.first_names_for(Gender::Male, Nationality::British, &DecadeLabel::Any),
        b.first_names_for(Gender::Male, Nationality::British, &DecadeLabel::Any)
    );
}
