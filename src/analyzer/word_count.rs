// file: src/analyzer/word_count.rs
// description: distinct word frequencies in first-seen order

use super::frequency::count_occurrences;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordFrequencies {
    counts: IndexMap<String, usize>,
}

impl WordFrequencies {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

pub fn count_words(words: &[String]) -> WordFrequencies {
    WordFrequencies {
        counts: count_occurrences(words.iter().cloned()),
    }
}
