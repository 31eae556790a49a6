use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ladder_core::candidates::weighed_siblings;
use ladder_core::neighbors::generate_neighbors;
use ladder_core::{PrefixIndex, RouteSearch, SearchConfig};

/// All strings of length 1..=4 over "abcde".
fn bench_index() -> PrefixIndex {
    let mut level = vec![String::new()];
    let mut words = Vec::new();
    for _ in 0..4 {
        level = level
            .iter()
            .flat_map(|w| "abcde".chars().map(move |c| format!("{w}{c}")))
            .collect();
        words.extend(level.iter().cloned());
    }
    PrefixIndex::from_words(words)
}

static WORDS: &[&str] = &["a", "ab", "cde", "abcd", "eeee"];

static ROUTES: &[(&str, &str)] = &[("ab", "ed"), ("abc", "eda"), ("aaaa", "ddee")];

fn bench_neighbors(c: &mut Criterion) {
    let index = bench_index();
    let mut group = c.benchmark_group("neighbors");
    for &word in WORDS {
        group.bench_with_input(BenchmarkId::new("generate", word), &word, |b, &word| {
            b.iter(|| generate_neighbors(&index, word));
        });
        group.bench_with_input(BenchmarkId::new("weighed", word), &word, |b, &word| {
            b.iter(|| weighed_siblings(&index, word, "bbbb"));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let index = bench_index();
    let config = SearchConfig::default()
        .with_deadline(Duration::from_millis(500))
        .with_max_routes(10);
    let search = RouteSearch::with_config(&index, config);

    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for &(origin, target) in ROUTES {
        let label = format!("{origin}->{target}");
        group.bench_with_input(
            BenchmarkId::new("find_route", label),
            &(origin, target),
            |b, &(o, t)| {
                b.iter(|| search.find_route(o, t));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_neighbors, bench_search);
criterion_main!(benches);
