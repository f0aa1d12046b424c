// src/graph/frequency.rs
//! Token occurrence counts gathered alongside the graph.

use std::collections::HashMap;

use super::word_graph::fold;

#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordFrequency {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`. Called once per corpus token, in order.
    pub fn record_token(&mut self, word: &str) {
        *self.counts.entry(fold(word).into_owned()).or_insert(0) += 1;
        self.total += 1;
    }

    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(fold(word).as_ref()).copied().unwrap_or(0)
    }

    /// Total tokens recorded.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of the corpus taken by `word`. Zero for an empty table.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn term_frequency(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total as f64
    }
}
