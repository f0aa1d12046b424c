// src/query/mod.rs
//! Analyses over a built `WordGraph`.
//!
//! None of these fail on unknown words: a missing vertex is an ordinary
//! answer, carried in the returned value.

pub mod augment;
pub mod bridge;
pub mod pagerank;
pub mod paths;
pub mod walk;

use std::fmt;

use serde::Serialize;

use crate::graph::WordGraph;

pub use augment::TextAugmenter;
pub use bridge::BridgeWords;
pub use pagerank::{RankConfig, RankEngine, RankInit, Ranking};
pub use paths::{PathQuery, ShortestPathTree, ShortestPaths, SourceQuery};
pub use walk::{Walk, WalkEngine};

/// Which of a pair of query words are absent from the graph.
/// Words keep the caller's spelling for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "missing", rename_all = "snake_case")]
pub enum MissingWords {
    Both { first: String, second: String },
    First { word: String },
    Second { word: String },
}

impl MissingWords {
    /// Returns `None` when both words are vertices.
    #[must_use]
    pub fn check(graph: &WordGraph, first: &str, second: &str) -> Option<Self> {
        match (graph.contains_vertex(first), graph.contains_vertex(second)) {
            (true, true) => None,
            (false, false) => Some(Self::Both {
                first: first.to_string(),
                second: second.to_string(),
            }),
            (false, true) => Some(Self::First {
                word: first.to_string(),
            }),
            (true, false) => Some(Self::Second {
                word: second.to_string(),
            }),
        }
    }
}

impl fmt::Display for MissingWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both { first, second } => {
                write!(f, "No \"{first}\" and \"{second}\" in the graph!")
            }
            Self::First { word } | Self::Second { word } => {
                write!(f, "No \"{word}\" in the graph!")
            }
        }
    }
}
