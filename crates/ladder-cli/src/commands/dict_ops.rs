use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::word_source;
use ladder_core::candidates::{weighed_siblings, Candidate};
use ladder_core::neighbors::generate_neighbors;
use ladder_core::settings::settings;
use ladder_core::PrefixIndex;

/// Build the index from the local list, or the configured remote one.
pub fn load_index(words: Option<&Path>) -> PrefixIndex {
    let list = die!(
        word_source::load_words(words, &settings().ingest.remote_url),
        "Error loading word list: {}"
    );
    let index = PrefixIndex::from_words(&list);
    info!(
        words = index.word_count(),
        nodes = index.node_count(),
        "index built"
    );
    index
}

#[derive(Serialize)]
struct CandidateRow<'a> {
    word: &'a str,
    weight: u32,
    potential: usize,
}

impl<'a> From<&'a Candidate> for CandidateRow<'a> {
    fn from(c: &'a Candidate) -> Self {
        Self {
            word: c.word(),
            weight: c.weight(),
            potential: c.potential(),
        }
    }
}

/// Print the neighbors of `word`, ranked against `target` when given.
pub fn siblings(index: &PrefixIndex, word: &str, target: Option<&str>, json: bool) {
    let Some(target) = target else {
        let neighbors = die!(generate_neighbors(index, word), "Error: {}");
        if json {
            let out = die!(serde_json::to_string(&neighbors), "Error encoding JSON: {}");
            println!("{out}");
        } else {
            for neighbor in &neighbors {
                println!("{neighbor}");
            }
        }
        return;
    };

    let ranked = die!(weighed_siblings(index, word, target), "Error: {}");
    if json {
        let rows: Vec<CandidateRow> = ranked.iter().map(CandidateRow::from).collect();
        let out = die!(serde_json::to_string(&rows), "Error encoding JSON: {}");
        println!("{out}");
    } else {
        for candidate in &ranked {
            println!("{candidate}");
        }
    }
}

pub fn exists(index: &PrefixIndex, words: &[String]) {
    for word in words {
        println!("{word}: {}", index.exists(word));
    }
}

pub fn tree(index: &PrefixIndex) {
    print!("{}", index.render());
}
