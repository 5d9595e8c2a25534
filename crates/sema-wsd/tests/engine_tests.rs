//! End-to-end tests for the disambiguation engine, against both a scripted
//! inventory with exact similarity values and the real in-memory taxonomy.

use std::collections::HashMap;

use proptest::prelude::*;

use sema_core::{PosClass, SenseId, SenseInventory, Similarity, TaggedTerm};
use sema_taxonomy::LexicalTaxonomy;
use sema_wsd::Disambiguator;

/// Inventory with hand-scripted candidates and similarities.
#[derive(Default)]
struct Scripted {
    candidates: HashMap<(String, PosClass), Vec<SenseId>>,
    senses: HashMap<String, Vec<SenseId>>,
    sims: HashMap<(SenseId, SenseId), f64>,
}

impl Scripted {
    fn candidate(mut self, surface: &str, pos: PosClass, sense: &str) -> Self {
        self.candidates
            .entry((surface.to_string(), pos))
            .or_default()
            .push(SenseId::from(sense));
        self
    }

    fn sense(mut self, surface: &str, sense: &str) -> Self {
        self.senses
            .entry(surface.to_string())
            .or_default()
            .push(SenseId::from(sense));
        self
    }

    fn sim(mut self, a: &str, b: &str, value: f64) -> Self {
        self.sims.insert((SenseId::from(a), SenseId::from(b)), value);
        self
    }
}

impl SenseInventory for Scripted {
    fn candidate_senses(&self, surface: &str, pos: PosClass) -> Vec<SenseId> {
        self.candidates
            .get(&(surface.to_string(), pos))
            .cloned()
            .unwrap_or_default()
    }

    fn all_senses(&self, surface: &str) -> Vec<SenseId> {
        self.senses.get(surface).cloned().unwrap_or_default()
    }

    fn similarity(&self, a: &SenseId, b: &SenseId) -> Similarity {
        self.sims
            .get(&(a.clone(), b.clone()))
            .map(|&s| Similarity::Score(s))
            .unwrap_or(Similarity::Undefined)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn nouns(words: &[&str]) -> Vec<TaggedTerm> {
    words.iter().map(|w| TaggedTerm::new(*w, "N")).collect()
}

#[test]
fn bank_prefers_shore_when_river_evidence_is_stronger() {
    // "bank" has a finance sense and a shore sense. The shore sense relates
    // to "river" at 0.9, the finance sense to "money" at 0.6; with both in
    // the window, shore wins.
    let inv = Scripted::default()
        .candidate("bank", PosClass::Noun, "bank.finance")
        .candidate("bank", PosClass::Noun, "bank.shore")
        .sense("river", "river.01")
        .sense("money", "money.01")
        .sim("bank.shore", "river.01", 0.9)
        .sim("bank.finance", "money.01", 0.6);

    let terms = nouns(&["bank", "river", "money"]);
    let results = Disambiguator::new(&inv).disambiguate(&terms);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].term, "bank");
    assert_eq!(results[0].sense, Some(SenseId::from("bank.shore")));
}

#[test]
fn tie_break_follows_enumeration_order() {
    let inv = Scripted::default()
        .candidate("bank", PosClass::Noun, "bank.finance")
        .candidate("bank", PosClass::Noun, "bank.shore")
        .sense("word", "word.01")
        .sim("bank.finance", "word.01", 0.5)
        .sim("bank.shore", "word.01", 0.5);

    let terms = nouns(&["bank", "word"]);
    let results = Disambiguator::new(&inv).disambiguate(&terms);

    assert_eq!(results[0].sense, Some(SenseId::from("bank.finance")));
}

#[test]
fn single_term_sequence_yields_one_none() {
    let inv = Scripted::default().candidate("bank", PosClass::Noun, "bank.finance");

    let results = Disambiguator::new(&inv).disambiguate(&nouns(&["bank"]));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].sense, None);
}

#[test]
fn out_of_vocabulary_terms_are_preserved_as_none() {
    let inv = Scripted::default();
    let terms = nouns(&["qwxz", "zzyx"]);

    let results = Disambiguator::new(&inv).disambiguate(&terms);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.sense.is_none()));
    assert_eq!(results[0].term, "qwxz");
    assert_eq!(results[1].term, "zzyx");
}

/// Small WordNet-like noun hierarchy:
///
/// entity ── institution ── bank.finance, money
///       └── object ── river
///                 └── slope ── bank.shore
fn river_money_taxonomy() -> LexicalTaxonomy {
    LexicalTaxonomy::builder()
        .synset("entity.n.01", PosClass::Noun, &["entity"], &[])
        .synset("institution.n.01", PosClass::Noun, &["institution"], &["entity.n.01"])
        .synset("object.n.01", PosClass::Noun, &["object"], &["entity.n.01"])
        .synset("slope.n.01", PosClass::Noun, &["slope"], &["object.n.01"])
        .synset("river.n.01", PosClass::Noun, &["river"], &["object.n.01"])
        .synset("bank.n.01", PosClass::Noun, &["bank"], &["institution.n.01"])
        .synset("bank.n.02", PosClass::Noun, &["bank"], &["slope.n.01"])
        .synset("money.n.01", PosClass::Noun, &["money"], &["institution.n.01"])
        .build()
        .unwrap()
}

#[test]
fn graph_distances_pick_the_topical_sense() {
    let tax = river_money_taxonomy();
    let driver = Disambiguator::new(&tax);

    // Near "river", the shore sense is 3 hops away (score 1/4) while the
    // finance sense is 4 hops away (score 1/5).
    let results = driver.disambiguate(&nouns(&["bank", "river"]));
    assert_eq!(results[0].sense, Some(SenseId::from("bank.n.02")));

    // Near "money", finance is 2 hops away (1/3) and shore 5 hops (1/6).
    let results = driver.disambiguate(&nouns(&["bank", "money"]));
    assert_eq!(results[0].sense, Some(SenseId::from("bank.n.01")));
}

#[test]
fn window_radius_limits_evidence() {
    let tax = river_money_taxonomy();

    // "river" sits outside a radius-1 window around index 0 once a filler
    // word separates them; only "money" remains visible.
    let terms = nouns(&["bank", "money", "river"]);
    let results = Disambiguator::new(&tax)
        .with_radius(1)
        .disambiguate(&terms);
    assert_eq!(results[0].sense, Some(SenseId::from("bank.n.01")));
}

proptest! {
    #[test]
    fn output_preserves_length_and_order(
        words in proptest::collection::vec(
            proptest::sample::select(vec!["bank", "river", "money", "slope", "qwxz"]),
            1..40,
        ),
        radius in 0usize..6,
    ) {
        let tax = river_money_taxonomy();
        let terms = nouns(&words);
        let driver = Disambiguator::new(&tax).with_radius(radius);

        let results = driver.disambiguate(&terms);
        prop_assert_eq!(results.len(), terms.len());
        for (result, term) in results.iter().zip(&terms) {
            prop_assert_eq!(&result.term, &term.surface);
        }
    }

    #[test]
    fn repeated_runs_are_deterministic_and_parallel_agrees(
        words in proptest::collection::vec(
            proptest::sample::select(vec!["bank", "river", "money", "entity", "object"]),
            1..25,
        ),
    ) {
        let tax = river_money_taxonomy();
        let terms = nouns(&words);
        let driver = Disambiguator::new(&tax);

        let first = driver.disambiguate(&terms);
        let second = driver.disambiguate(&terms);
        let parallel = driver.disambiguate_parallel(&terms);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &parallel);
    }
}
