// properties.rs - Randomized cross-checks against a naive scanner.

use std::collections::BTreeSet;

use ahotrie::prelude::*;
use proptest::prelude::*;

/// Every `(pattern, start)` with `text[start..start + len] == pattern`.
fn naive(patterns: &[Vec<u8>], text: &[u8]) -> BTreeSet<(Vec<u8>, usize)> {
    let mut out = BTreeSet::new();
    for p in patterns {
        for start in 0..=text.len() {
            if text[start..].starts_with(p) {
                out.insert((p.clone(), start));
            }
        }
    }
    out
}

fn found(ac: &Automaton, text: &[u8]) -> Vec<(Vec<u8>, usize)> {
    ac.find(text)
        .into_iter()
        .map(|m| (m.pattern().to_vec(), m.start()))
        .collect()
}

// Small alphabets make overlaps and shared suffixes common.
fn pattern() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', 0u8]), 1..6)
}

fn text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'd', 0u8]), 0..64)
}

proptest! {
    #[test]
    fn matches_naive_scan(patterns in prop::collection::vec(pattern(), 0..8), text in text()) {
        let ac = Automaton::new(&patterns).unwrap();
        let got = found(&ac, &text);
        let set: BTreeSet<_> = got.iter().cloned().collect();
        prop_assert_eq!(set.len(), got.len(), "duplicate matches reported");
        prop_assert_eq!(set, naive(&patterns, &text));
    }

    #[test]
    fn ordered_by_end_then_length(patterns in prop::collection::vec(pattern(), 1..8), text in text()) {
        let ac = Automaton::new(&patterns).unwrap();
        let keys: Vec<(usize, std::cmp::Reverse<usize>)> = ac
            .find(&text)
            .iter()
            .map(|m| (m.end(), std::cmp::Reverse(m.len())))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn duplicates_do_not_change_results(patterns in prop::collection::vec(pattern(), 1..6), text in text()) {
        let once = Automaton::new(&patterns).unwrap();
        let doubled: Vec<Vec<u8>> = patterns.iter().chain(patterns.iter()).cloned().collect();
        let twice = Automaton::new(&doubled).unwrap();
        prop_assert_eq!(found(&once, &text), found(&twice, &text));
    }

    #[test]
    fn order_of_patterns_is_irrelevant(patterns in prop::collection::vec(pattern(), 1..6), text in text()) {
        let forward = Automaton::new(&patterns).unwrap();
        let reversed: Vec<Vec<u8>> = patterns.iter().rev().cloned().collect();
        let backward = Automaton::new(&reversed).unwrap();
        prop_assert_eq!(found(&forward, &text), found(&backward, &text));
    }

    #[test]
    fn deterministic(patterns in prop::collection::vec(pattern(), 0..6), text in text()) {
        let a = Automaton::new(&patterns).unwrap();
        let b = Automaton::new(&patterns).unwrap();
        prop_assert_eq!(found(&a, &text), found(&b, &text));
    }

    #[test]
    fn prefilter_is_transparent(patterns in prop::collection::vec(pattern(), 0..4), text in text()) {
        let fast = Automaton::new(&patterns).unwrap();
        let slow = Automaton::builder().prefilter(false).build(&patterns).unwrap();
        prop_assert_eq!(found(&fast, &text), found(&slow, &text));
    }

    #[test]
    fn nul_terminated_matches_truncated_inputs(patterns in prop::collection::vec(pattern(), 0..6), text in text()) {
        let ac = Automaton::builder().nul_terminated(true).build(&patterns).unwrap();
        let cut = |b: &[u8]| -> Vec<u8> { b.iter().copied().take_while(|&x| x != 0).collect() };
        let truncated: Vec<Vec<u8>> = patterns.iter().map(|p| cut(p)).collect();
        let text_cut = cut(&text);

        let got: BTreeSet<_> = found(&ac, &text).into_iter().collect();
        prop_assert_eq!(got, naive(&truncated, &text_cut));
    }
}
