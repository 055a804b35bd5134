// file: src/analyzer/frequency.rs
// description: insertion-ordered occurrence counting shared by mode and word count
// reference: https://docs.rs/indexmap

use indexmap::IndexMap;
use std::hash::Hash;

/// Counts occurrences, keeping keys in first-seen order.
pub fn count_occurrences<K, I>(items: I) -> IndexMap<K, usize>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut frequencies = IndexMap::new();
    for item in items {
        *frequencies.entry(item).or_insert(0) += 1;
    }
    frequencies
}

/// Returns the first key whose count strictly exceeds every earlier count.
pub fn first_most_frequent<K>(frequencies: &IndexMap<K, usize>) -> Option<&K> {
    let mut max_count = 0;
    let mut winner = None;

    for (key, &count) in frequencies {
        if count > max_count {
            max_count = count;
            winner = Some(key);
        }
    }

    winner
}
