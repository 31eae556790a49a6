//! Target-relative scoring of one-edit neighbors.
//!
//! A [`Candidate`] pairs a neighbor word with its `weight` (positional
//! similarity to the target) and `potential` (how many neighbors it has in
//! turn). The search explores candidates in [`ranker::order`] order.

use std::fmt;

use tracing::{debug, debug_span};

use crate::error::LadderError;
use crate::index::PrefixIndex;
use crate::neighbors::generate_neighbors;

pub mod ranker;

#[cfg(test)]
mod tests;

/// A neighbor word scored against one target.
///
/// Built fresh for each query and never shared across targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    word: String,
    weight: u32,
    potential: usize,
    neighbors: Vec<String>,
}

impl Candidate {
    /// Score `word` against `target`. `neighbors` is the word's own neighbor
    /// list and backs its potential.
    pub fn new(word: String, target: &str, neighbors: Vec<String>) -> Self {
        let weight = weight(&word, target);
        Self {
            word,
            weight,
            potential: neighbors.len(),
            neighbors,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn potential(&self) -> usize {
        self.potential
    }

    pub fn neighbors(&self) -> &[String] {
        &self.neighbors
    }

    pub fn into_word(self) -> String {
        self.word
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{[{}] weight: {} potential: {}}}",
            self.word, self.weight, self.potential
        )
    }
}

/// Positional similarity of `candidate` to `target`, in `0..=100`.
///
/// Each matching position is worth `100 / len(target)` (integer division, so a
/// perfect match on a three-character target scores 99). Candidates shorter
/// than the target score 0; longer ones are compared on the target's length.
pub fn weight(candidate: &str, target: &str) -> u32 {
    let target_len = target.chars().count();
    if target_len == 0 || candidate.chars().count() < target_len {
        return 0;
    }
    let unit = 100 / target_len as u32;
    let matches = candidate
        .chars()
        .zip(target.chars())
        .filter(|(c, t)| c == t)
        .count() as u32;
    matches * unit
}

/// Number of one-edit neighbors `word` has; 0 when it has none.
pub fn potential(index: &PrefixIndex, word: &str) -> Result<usize, LadderError> {
    own_neighbors(index, word).map(|neighbors| neighbors.len())
}

/// Neighbors backing a candidate's potential. A word without neighbors has
/// an empty list rather than an error.
fn own_neighbors(index: &PrefixIndex, word: &str) -> Result<Vec<String>, LadderError> {
    match generate_neighbors(index, word) {
        Err(LadderError::NoMatches(_)) => Ok(Vec::new()),
        other => other,
    }
}

/// Neighbors of `word`, each scored against `target` and ranked.
///
/// Every candidate triggers its own neighbor generation to compute its
/// potential, so the cost grows with neighbors × neighbors-of-neighbors.
pub fn weighed_siblings(
    index: &PrefixIndex,
    word: &str,
    target: &str,
) -> Result<Vec<Candidate>, LadderError> {
    let _span = debug_span!("weighed_siblings", word, target).entered();

    let neighbors = generate_neighbors(index, word)?;
    let mut candidates = neighbors
        .into_iter()
        .map(|neighbor| {
            let own = own_neighbors(index, &neighbor)?;
            Ok(Candidate::new(neighbor, target, own))
        })
        .collect::<Result<Vec<_>, LadderError>>()?;

    ranker::order(&mut candidates);
    debug!(
        candidate_count = candidates.len(),
        best_weight = candidates.first().map(|c| c.weight)
    );
    Ok(candidates)
}
