// src/graph/word_graph.rs
//! The word-adjacency graph.
//!
//! Vertices are case-folded words. An edge `u -> v` carries the number of
//! times `v` immediately followed `u` in the corpus. Every vertex has an
//! adjacency entry, possibly empty, so vertex membership and adjacency never
//! disagree.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

static NO_EDGES: BTreeMap<String, u32> = BTreeMap::new();

/// Directed, weighted word graph. Ordered maps keep every enumeration
/// lexicographic, which keeps reports and exports stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordGraph {
    adjacency: BTreeMap<String, BTreeMap<String, u32>>,
}

/// Case-folds a word. Borrows when the word is already lowercase.
#[must_use]
pub fn fold(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

impl WordGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `word` as a vertex. No-op if already present.
    pub fn add_vertex(&mut self, word: &str) {
        let key = fold(word);
        if !self.adjacency.contains_key(key.as_ref()) {
            self.adjacency.insert(key.into_owned(), BTreeMap::new());
        }
    }

    /// Records one occurrence of `target` following `source`.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let target = fold(target).into_owned();
        self.add_vertex(&target);
        let weight = self
            .adjacency
            .entry(fold(source).into_owned())
            .or_default()
            .entry(target)
            .or_insert(0);
        *weight += 1;
    }

    /// Weight of `source -> target`, or 0 when there is no such edge.
    #[must_use]
    pub fn weight(&self, source: &str, target: &str) -> u32 {
        self.adjacency
            .get(fold(source).as_ref())
            .and_then(|edges| edges.get(fold(target).as_ref()))
            .copied()
            .unwrap_or(0)
    }

    /// Successors of `word` with their weights. Empty for unknown words.
    #[must_use]
    pub fn outgoing_edges(&self, word: &str) -> &BTreeMap<String, u32> {
        self.adjacency.get(fold(word).as_ref()).unwrap_or(&NO_EDGES)
    }

    /// Vertices with an edge into `word`, in lexicographic order.
    ///
    /// Scans every vertex; there is no reverse index.
    #[must_use]
    pub fn incoming_vertices(&self, word: &str) -> Vec<&str> {
        let key = fold(word);
        self.adjacency
            .iter()
            .filter(|(_, edges)| edges.get(key.as_ref()).is_some_and(|w| *w > 0))
            .map(|(source, _)| source.as_str())
            .collect()
    }

    /// Number of distinct successors of `word`.
    #[must_use]
    pub fn out_degree(&self, word: &str) -> usize {
        self.outgoing_edges(word).len()
    }

    /// Number of distinct predecessors of `word`.
    #[must_use]
    pub fn in_degree(&self, word: &str) -> usize {
        self.incoming_vertices(word).len()
    }

    #[must_use]
    pub fn contains_vertex(&self, word: &str) -> bool {
        self.adjacency.contains_key(fold(word).as_ref())
    }

    /// The graph's own copy of `word`, if it is a vertex.
    #[must_use]
    pub fn vertex(&self, word: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(fold(word).as_ref())
            .map(|(key, _)| key.as_str())
    }

    /// All vertices in lexicographic order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Every `(source, target, weight)` triple, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.adjacency.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |(target, w)| (source.as_str(), target.as_str(), *w))
        })
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct ordered pairs with an edge.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
