// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Model-based tests for the Lanai Trie.
//!
//! Random insert/remove sequences are replayed against a `BTreeSet` and the trie
//! is checked for agreement, and for having no dead nodes, after every step.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::data_structures::lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError};
use crate::tests::{invalid_word_strategy, small_alphabet_word_strategy, word_strategy};

/// Every non-empty prefix of every stored word, which is exactly the set of
/// non-root nodes a minimal trie holds.
fn expected_prefixes(words: &BTreeSet<String>) -> BTreeSet<String> {
    words
        .iter()
        .flat_map(|w| (1..=w.len()).map(move |end| w[..end].to_string()))
        .collect()
}

/// Checks membership and minimality of `trie` against `model`.
fn assert_matches_model(trie: &LanaiTrie, model: &BTreeSet<String>) -> Result<(), TestCaseError> {
    let prefixes = expected_prefixes(model);

    for word in model {
        prop_assert!(trie.search(word), "stored word {:?} not found", word);
    }
    for prefix in &prefixes {
        prop_assert!(trie.starts_with(prefix), "prefix {:?} not found", prefix);
        prop_assert_eq!(trie.search(prefix), model.contains(prefix));
    }

    if !model.is_empty() {
        prop_assert!(trie.has_root());
    }
    let root = usize::from(trie.has_root());
    prop_assert_eq!(trie.node_count(), root + prefixes.len());
    prop_assert_eq!(trie.is_empty(), model.is_empty());
    Ok(())
}

#[test]
fn test_cat_car_scenario() {
    let mut trie = LanaiTrie::new();
    trie.insert("cat").unwrap();
    trie.insert("car").unwrap();
    trie.remove("cat");

    assert!(trie.search("car"));
    assert!(!trie.search("cat"));
    assert!(trie.starts_with("ca"));
}

#[test]
fn test_long_word_roundtrip() {
    let word = "abcdefghijklmnopqrstuvwxyz".repeat(40);
    let mut trie = LanaiTrie::new();

    assert!(trie.insert(&word).unwrap());
    assert_eq!(trie.node_count(), word.len() + 1);

    let outcome = trie.remove(&word);
    assert!(outcome.was_present);
    assert_eq!(outcome.released, word.len() + 1);
}

#[test]
fn test_deep_word_removal() {
    let word = "z".repeat(100_000);
    let mut trie = LanaiTrie::new();
    trie.insert(&word).unwrap();

    let outcome = trie.remove(&word);
    assert!(outcome.was_present);
    assert_eq!(outcome.released, word.len() + 1);
    assert!(!trie.has_root());
    assert_eq!(trie.node_count(), 0);
}

#[test]
fn test_deep_word_removal_keeps_shared_prefix() {
    let stem = "q".repeat(50_000);
    let long = format!("{stem}{}", "r".repeat(50_000));
    let mut trie = LanaiTrie::new();
    trie.insert(&stem).unwrap();
    trie.insert(&long).unwrap();

    let outcome = trie.remove(&long);
    assert!(outcome.was_present);
    assert_eq!(outcome.released, 50_000);
    assert!(trie.search(&stem));
    assert_eq!(trie.node_count(), stem.len() + 1);
}

#[test]
fn test_deep_trie_drops_without_recursion() {
    let word = "z".repeat(100_000);
    let mut trie = LanaiTrie::new();
    trie.insert(&word).unwrap();
    assert_eq!(trie.destroy(), word.len() + 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn proptest_insert_then_search(word in word_strategy(24)) {
        let mut trie = LanaiTrie::new();
        trie.insert(&word).unwrap();
        // The empty word is never marked as present.
        prop_assert_eq!(trie.search(&word), !word.is_empty());
        prop_assert!(trie.starts_with(&word));
    }

    #[test]
    fn proptest_insert_then_remove_prunes_path(word in word_strategy(24)) {
        let mut trie = LanaiTrie::new();
        trie.insert(&word).unwrap();
        let outcome = trie.remove(&word);

        prop_assert_eq!(outcome.was_present, !word.is_empty());
        prop_assert!(!trie.search(&word));
        prop_assert!(!trie.has_root());
        prop_assert_eq!(trie.node_count(), 0);
        prop_assert_eq!(outcome.released, word.len() + 1);
    }

    #[test]
    fn proptest_insert_is_idempotent(word in word_strategy(16)) {
        let mut once = LanaiTrie::new();
        once.insert(&word).unwrap();

        let mut twice = LanaiTrie::new();
        twice.insert(&word).unwrap();
        prop_assert!(!twice.insert(&word).unwrap());

        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.search(&word), twice.search(&word));
    }

    #[test]
    fn proptest_invalid_word_has_no_effect(
        stored in prop::collection::vec(small_alphabet_word_strategy(), 0..8),
        invalid in invalid_word_strategy(),
    ) {
        let mut trie = LanaiTrie::new();
        for word in &stored {
            trie.insert(word).unwrap();
        }
        let nodes = trie.node_count();

        let is_invalid_word = matches!(
            trie.insert(&invalid),
            Err(LanaiTrieError::InvalidWord { .. })
        );
        prop_assert!(is_invalid_word);
        prop_assert_eq!(trie.node_count(), nodes);
        prop_assert!(!trie.search(&invalid));
    }

    #[test]
    fn proptest_remove_missing_word_is_noop(
        stored in prop::collection::vec(small_alphabet_word_strategy(), 1..8),
        missing in small_alphabet_word_strategy(),
    ) {
        let mut trie = LanaiTrie::new();
        let mut model = BTreeSet::new();
        for word in stored.iter().filter(|w| !w.is_empty()) {
            trie.insert(word).unwrap();
            model.insert(word.clone());
        }
        prop_assume!(!model.is_empty() && !model.contains(&missing));

        let nodes = trie.node_count();
        let outcome = trie.remove(&missing);

        prop_assert!(!outcome.was_present);
        prop_assert_eq!(outcome.released, 0);
        prop_assert_eq!(trie.node_count(), nodes);
        assert_matches_model(&trie, &model)?;
    }

    #[test]
    fn proptest_matches_set_model(
        ops in prop::collection::vec((any::<bool>(), small_alphabet_word_strategy()), 1..60)
    ) {
        let mut trie = LanaiTrie::new();
        let mut model = BTreeSet::new();

        for (is_insert, word) in ops {
            if is_insert {
                let newly = trie.insert(&word).unwrap();
                let expected = !word.is_empty() && model.insert(word.clone());
                prop_assert_eq!(newly, expected);
            } else {
                let outcome = trie.remove(&word);
                prop_assert_eq!(outcome.was_present, model.remove(&word));
            }
            assert_matches_model(&trie, &model)?;
        }
    }

    #[test]
    fn proptest_node_budget_never_exceeded(
        budget in 1usize..12,
        words in prop::collection::vec(small_alphabet_word_strategy(), 1..10),
    ) {
        let mut trie = LanaiTrie::with_config(LanaiTrieConfig::new().with_max_nodes(budget));

        for word in &words {
            match trie.insert(word) {
                Ok(_) => {
                    prop_assert!(trie.search(word) || word.is_empty());
                }
                Err(LanaiTrieError::NodeLimitReached { limit }) => {
                    prop_assert_eq!(limit, budget);
                }
                Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
            }
            prop_assert!(trie.node_count() <= budget);
        }
    }
}
