// src/query/bridge.rs
//! Bridge words: every `m` with `w1 -> m` and `m -> w2`.

use std::fmt;

use serde::Serialize;

use super::MissingWords;
use crate::graph::{fold, WordGraph};

/// Outcome of a bridge-word query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeWords {
    Missing(MissingWords),
    Found {
        from: String,
        to: String,
        words: Vec<String>,
    },
}

impl BridgeWords {
    /// Runs the query. Input words are case-folded for lookup.
    #[must_use]
    pub fn query(graph: &WordGraph, word1: &str, word2: &str) -> Self {
        if let Some(missing) = MissingWords::check(graph, word1, word2) {
            return Self::Missing(missing);
        }
        let words = find(graph, &fold(word1), &fold(word2))
            .into_iter()
            .map(str::to_string)
            .collect();
        Self::Found {
            from: word1.to_string(),
            to: word2.to_string(),
            words,
        }
    }

    /// The bridge words, empty when either input was missing.
    #[must_use]
    pub fn words(&self) -> &[String] {
        match self {
            Self::Missing(_) => &[],
            Self::Found { words, .. } => words,
        }
    }
}

/// Bridge words from `from` to `to`, in lexicographic order.
///
/// Expects case-folded input. Scans every vertex, so a query is O(V).
#[must_use]
pub fn find<'g>(graph: &'g WordGraph, from: &str, to: &str) -> Vec<&'g str> {
    graph
        .vertices()
        .filter(|m| graph.weight(from, m) > 0 && graph.weight(m, to) > 0)
        .collect()
}

impl fmt::Display for BridgeWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(missing) => write!(f, "{missing}"),
            Self::Found { from, to, words } => match words.as_slice() {
                [] => write!(f, "No bridge words from \"{from}\" to \"{to}\"!"),
                [only] => write!(
                    f,
                    "The bridge word from \"{from}\" to \"{to}\" is: \"{only}\"."
                ),
                [init @ .., last] => {
                    write!(f, "The bridge words from \"{from}\" to \"{to}\" are: ")?;
                    for w in init {
                        write!(f, "\"{w}\", ")?;
                    }
                    write!(f, "and \"{last}\".")
                }
            },
        }
    }
}
