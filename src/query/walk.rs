// src/query/walk.rs
//! Random traversal that stops at a dead end or a repeated edge.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;

/// Ordered words visited by one walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    pub words: Vec<String>,
}

impl Walk {
    /// Directed edges traversed, in order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.words.windows(2).filter_map(|pair| match pair {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        })
    }

    /// Writes the walk as space-separated words.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|e| GraphError::io(e, path))
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

pub struct WalkEngine<'g, R: Rng> {
    graph: &'g WordGraph,
    rng: R,
}

impl<'g, R: Rng> WalkEngine<'g, R> {
    pub fn new(graph: &'g WordGraph, rng: R) -> Self {
        Self { graph, rng }
    }

    /// Walks from a uniformly chosen vertex, picking successors uniformly
    /// (edge weight is ignored). Stops before re-traversing any edge.
    /// `None` for an empty graph.
    pub fn walk(&mut self) -> Option<Walk> {
        let graph = self.graph;
        let count = graph.vertex_count();
        if count == 0 {
            return None;
        }
        let start = self.rng.random_range(0..count);
        let mut current = graph.vertices().nth(start)?;
        let mut visited: HashSet<(&str, &str)> = HashSet::new();
        let mut words = vec![current.to_string()];

        while let Some(next) = self.pick_successor(current) {
            if !visited.insert((current, next)) {
                break;
            }
            words.push(next.to_string());
            current = next;
        }

        Some(Walk { words })
    }

    /// Uniform over distinct successors; `None` at a dead end.
    fn pick_successor(&mut self, word: &str) -> Option<&'g str> {
        let successors: Vec<&'g str> = self
            .graph
            .outgoing_edges(word)
            .keys()
            .map(String::as_str)
            .collect();
        if successors.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..successors.len());
        successors.get(idx).copied()
    }
}
