//! One-edit neighbor generation.
//!
//! Neighbors are found by walking the prefix tree rather than by comparing
//! against every word: substitutions come from the siblings of each node along
//! the word's path, expansions from terminal children of its last node, and
//! reductions from its second-to-last node.

use std::collections::HashSet;

use crate::error::LadderError;
use crate::index::{NodeId, PrefixIndex};

/// Every other dictionary word exactly one edit away from `word`.
///
/// Results are deduplicated and come in discovery order (substitutions, then
/// expansions, then reductions). That order is not a ranking.
pub fn generate_neighbors(index: &PrefixIndex, word: &str) -> Result<Vec<String>, LadderError> {
    let nodes = index.nodes_along(word);
    if nodes.is_empty() {
        return Err(LadderError::NotFound(word.to_string()));
    }
    let chars: Vec<char> = word.chars().collect();

    let mut out = Vec::new();
    let mut seen = HashSet::new();
    let mut keep = |candidate: String| {
        if candidate != word && seen.insert(candidate.clone()) {
            out.push(candidate);
        }
    };

    for (pos, &id) in nodes.iter().enumerate() {
        for candidate in substitutions(index, &chars, pos, id) {
            keep(candidate);
        }
    }
    for candidate in expansions(index, word, &nodes) {
        keep(candidate);
    }
    if let Some(candidate) = reduction(index, &chars, &nodes) {
        keep(candidate);
    }

    if out.is_empty() {
        return Err(LadderError::NoMatches(word.to_string()));
    }
    Ok(out)
}

/// Swap the character at `pos` for each sibling edge of the node at that depth,
/// keeping only full strings that are dictionary words.
fn substitutions(index: &PrefixIndex, chars: &[char], pos: usize, id: NodeId) -> Vec<String> {
    let Some(parent) = index.node(id).parent() else {
        return Vec::new();
    };

    let mut buf = chars.to_vec();
    index
        .node(parent)
        .children()
        .iter()
        .filter(|&&(ch, _)| ch != chars[pos])
        .filter_map(|&(ch, _)| {
            buf[pos] = ch;
            let candidate: String = buf.iter().collect();
            index.exists(&candidate).then_some(candidate)
        })
        .collect()
}

/// Append each terminal child of the last node.
fn expansions(index: &PrefixIndex, word: &str, nodes: &[NodeId]) -> Vec<String> {
    let Some(&last) = nodes.last() else {
        return Vec::new();
    };

    index
        .node(last)
        .children()
        .iter()
        .filter(|&&(_, child)| index.node(child).is_terminal())
        .map(|&(ch, _)| {
            let mut candidate = String::with_capacity(word.len() + ch.len_utf8());
            candidate.push_str(word);
            candidate.push(ch);
            candidate
        })
        .collect()
}

/// Drop the last character when the prefix it leaves behind is itself a word.
fn reduction(index: &PrefixIndex, chars: &[char], nodes: &[NodeId]) -> Option<String> {
    if nodes.len() < 2 {
        return None;
    }
    let before_last = nodes[nodes.len() - 2];
    index
        .node(before_last)
        .is_terminal()
        .then(|| chars[..chars.len() - 1].iter().collect())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::route::is_one_edit;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_substitutions_only() {
        let index = PrefixIndex::from_words(["cat", "dog", "pat", "cot", "fur"]);
        let neighbors = generate_neighbors(&index, "cat").unwrap();
        assert_eq!(sorted(neighbors), vec!["cot", "pat"]);
    }

    #[test]
    fn test_discovery_order() {
        let index =
            PrefixIndex::from_words(["cat", "dog", "pat", "cot", "cog", "fur", "fir", "zap", "catt"]);
        let neighbors = generate_neighbors(&index, "cat").unwrap();
        // Substitutions by position, then the expansion.
        assert_eq!(neighbors, vec!["pat", "cot", "catt"]);
    }

    #[test]
    fn test_expansion_and_reduction() {
        let index = PrefixIndex::from_words(["car", "cart", "care", "ca"]);
        let neighbors = generate_neighbors(&index, "car").unwrap();
        assert_eq!(neighbors, vec!["care", "cart", "ca"]);

        let neighbors = generate_neighbors(&index, "cart").unwrap();
        assert_eq!(neighbors, vec!["care", "car"]);
    }

    #[test]
    fn test_substitution_needs_full_word() {
        // The root has a 'b' edge, but "bab" is not a word.
        let index = PrefixIndex::from_words(["cab", "bat", "cob"]);
        let neighbors = generate_neighbors(&index, "cab").unwrap();
        assert_eq!(neighbors, vec!["cob"]);
    }

    #[test]
    fn test_single_character_words() {
        let index = PrefixIndex::from_words(["a", "b", "ab"]);
        let neighbors = generate_neighbors(&index, "a").unwrap();
        assert_eq!(neighbors, vec!["b", "ab"]);
        let neighbors = generate_neighbors(&index, "ab").unwrap();
        // "bb" is not a word; "a" via reduction.
        assert_eq!(neighbors, vec!["a"]);
    }

    #[test]
    fn test_missing_word() {
        let index = PrefixIndex::from_words(["cat"]);
        assert_eq!(
            generate_neighbors(&index, "fog"),
            Err(LadderError::NotFound("fog".into()))
        );
        assert_eq!(
            generate_neighbors(&index, ""),
            Err(LadderError::NotFound(String::new()))
        );
    }

    #[test]
    fn test_no_matches() {
        let index = PrefixIndex::from_words(["rabi", "ruby", "rare"]);
        assert_eq!(
            generate_neighbors(&index, "rabi"),
            Err(LadderError::NoMatches("rabi".into()))
        );
    }

    proptest! {
        #[test]
        fn neighbors_are_one_edit_members(words in prop::collection::vec("[a-c]{1,4}", 1..30)) {
            let index = PrefixIndex::from_words(&words);
            for w in &words {
                match generate_neighbors(&index, w) {
                    Ok(neighbors) => {
                        for n in &neighbors {
                            prop_assert_ne!(n, w);
                            prop_assert!(index.exists(n));
                            prop_assert!(is_one_edit(w, n), "{} -> {}", w, n);
                        }
                        let unique: HashSet<_> = neighbors.iter().collect();
                        prop_assert_eq!(unique.len(), neighbors.len());
                    }
                    Err(e) => prop_assert_eq!(e, LadderError::NoMatches(w.clone())),
                }
            }
        }
    }
}
