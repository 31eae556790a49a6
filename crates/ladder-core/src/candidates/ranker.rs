//! Exploration order for scored candidates.
//!
//! Two quicksort passes: the whole list by weight, then each run of equal
//! weight by potential, both descending. Neither pass is stable, so candidates
//! tied on both keys keep no particular relative order.

use super::Candidate;

/// Sort `candidates` by descending weight, breaking ties by descending potential.
pub fn order(candidates: &mut [Candidate]) {
    quick_sort_desc(candidates, &|c: &Candidate| c.weight as usize);
    for run in candidates.chunk_by_mut(|a, b| a.weight == b.weight) {
        quick_sort_desc(run, &|c: &Candidate| c.potential);
    }
}

/// In-place descending quicksort keyed by `key`, middle element as pivot.
fn quick_sort_desc<F>(items: &mut [Candidate], key: &F)
where
    F: Fn(&Candidate) -> usize,
{
    if items.len() < 2 {
        return;
    }

    let right = items.len() - 1;
    items.swap(items.len() / 2, right);
    let pivot = key(&items[right]);

    let mut left = 0;
    for i in 0..right {
        if key(&items[i]) > pivot {
            items.swap(left, i);
            left += 1;
        }
    }
    items.swap(left, right);

    let (head, tail) = items.split_at_mut(left);
    quick_sort_desc(head, key);
    quick_sort_desc(&mut tail[1..], key);
}
