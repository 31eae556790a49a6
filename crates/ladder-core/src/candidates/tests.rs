use proptest::prelude::*;

use super::ranker::order;
use super::{potential, weighed_siblings, weight, Candidate};
use crate::error::LadderError;
use crate::index::PrefixIndex;

fn cat_dict() -> PrefixIndex {
    PrefixIndex::from_words(["cat", "dog", "pat", "cot", "cog", "fur", "fir", "zap", "catt"])
}

fn scored(word: &str, weight: u32, potential: usize) -> Candidate {
    Candidate {
        word: word.to_string(),
        weight,
        potential,
        neighbors: Vec::new(),
    }
}

#[test]
fn test_weight_positional_matches() {
    assert_eq!(weight("cot", "dog"), 33);
    assert_eq!(weight("cog", "dog"), 66);
    assert_eq!(weight("pat", "dog"), 0);
    assert_eq!(weight("gold", "gold"), 100);
}

#[test]
fn test_weight_rounding_artifact() {
    // 100 / 3 = 33 per position.
    assert_eq!(weight("dog", "dog"), 99);
}

#[test]
fn test_weight_shorter_candidate_scores_zero() {
    assert_eq!(weight("do", "dog"), 0);
    assert_eq!(weight("", "dog"), 0);
}

#[test]
fn test_weight_longer_candidate_uses_target_length() {
    assert_eq!(weight("dogs", "dog"), 99);
    assert_eq!(weight("catt", "dog"), 0);
}

#[test]
fn test_weight_empty_target() {
    assert_eq!(weight("dog", ""), 0);
}

#[test]
fn test_potential() {
    let index = cat_dict();
    assert_eq!(potential(&index, "cot"), Ok(2));
    assert_eq!(potential(&index, "catt"), Ok(1));
    assert_eq!(
        potential(&index, "cut"),
        Err(LadderError::NotFound("cut".into()))
    );
    let lonely = PrefixIndex::from_words(["abc", "xyz"]);
    assert_eq!(potential(&lonely, "abc"), Ok(0));
}

#[test]
fn test_weighed_siblings_ranking() {
    let index = cat_dict();
    let ranked = weighed_siblings(&index, "cat", "dog").unwrap();
    assert_eq!(ranked.len(), 3);

    assert_eq!(ranked[0].to_string(), "{[cot] weight: 33 potential: 2}");
    assert_eq!(ranked[0].neighbors().len(), 2);

    let mut rest: Vec<String> = ranked[1..].iter().map(|c| c.to_string()).collect();
    rest.sort();
    assert_eq!(
        rest,
        vec![
            "{[catt] weight: 0 potential: 1}",
            "{[pat] weight: 0 potential: 1}",
        ]
    );
}

#[test]
fn test_candidate_potential_matches_potential() {
    let index = cat_dict();
    for candidate in weighed_siblings(&index, "cat", "dog").unwrap() {
        assert_eq!(
            Ok(candidate.potential()),
            potential(&index, candidate.word()),
            "{candidate}"
        );
    }

    // "xyz" has no neighbors of its own.
    let index = PrefixIndex::from_words(["abc", "abd", "xyz"]);
    let ranked = weighed_siblings(&index, "abd", "xyz").unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].potential(), 1);
    assert_eq!(potential(&index, "xyz"), Ok(0));
}

#[test]
fn test_weighed_siblings_errors() {
    let index = cat_dict();
    assert_eq!(
        weighed_siblings(&index, "cut", "dog"),
        Err(LadderError::NotFound("cut".into()))
    );

    let index = PrefixIndex::from_words(["ruby", "rabi"]);
    assert_eq!(
        weighed_siblings(&index, "rabi", "ruby"),
        Err(LadderError::NoMatches("rabi".into()))
    );
}

#[test]
fn test_order_weight_then_potential() {
    let mut items = vec![
        scored("a", 0, 5),
        scored("b", 50, 1),
        scored("c", 25, 9),
        scored("d", 50, 3),
        scored("e", 0, 7),
        scored("f", 75, 0),
    ];
    order(&mut items);
    let words: Vec<&str> = items.iter().map(|c| c.word()).collect();
    assert_eq!(words, vec!["f", "d", "b", "c", "e", "a"]);
}

#[test]
fn test_order_small_inputs() {
    let mut empty: Vec<Candidate> = Vec::new();
    order(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![scored("x", 10, 1)];
    order(&mut one);
    assert_eq!(one[0].word(), "x");
}

proptest! {
    #[test]
    fn weight_within_bounds(candidate in "[a-d]{0,8}", target in "[a-d]{0,8}") {
        prop_assert!(weight(&candidate, &target) <= 100);
    }

    #[test]
    fn order_is_sorted_permutation(keys in prop::collection::vec((0u32..5, 0usize..4), 0..40)) {
        let mut items: Vec<Candidate> = keys
            .iter()
            .enumerate()
            .map(|(i, &(w, p))| scored(&i.to_string(), w * 25, p))
            .collect();
        order(&mut items);

        for pair in items.windows(2) {
            prop_assert!(
                (pair[0].weight, pair[0].potential) >= (pair[1].weight, pair[1].potential)
            );
        }
        let mut words: Vec<usize> = items.iter().map(|c| c.word.parse().unwrap()).collect();
        words.sort_unstable();
        prop_assert_eq!(words, (0..keys.len()).collect::<Vec<_>>());
    }
}
