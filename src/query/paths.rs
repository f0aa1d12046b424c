// src/query/paths.rs
//! All-shortest-paths search.
//!
//! Dijkstra that keeps every predecessor achieving a vertex's best distance,
//! so the minimum-predecessor DAG yields every tied shortest path. One tree
//! per source answers queries for every target.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use log::debug;
use serde::Serialize;

use super::MissingWords;
use crate::graph::{fold, WordGraph};

/// Shortest-path distances and tied predecessors from one source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    source: &'g str,
    /// Absent key means unreachable.
    distances: HashMap<&'g str, u64>,
    predecessors: HashMap<&'g str, Vec<&'g str>>,
}

impl<'g> ShortestPathTree<'g> {
    /// Runs the search to exhaustion. `None` if `source` is not a vertex.
    #[must_use]
    pub fn build(graph: &'g WordGraph, source: &str) -> Option<Self> {
        let source = graph.vertex(source)?;
        let mut distances = HashMap::from([(source, 0_u64)]);
        let mut predecessors: HashMap<&'g str, Vec<&'g str>> = HashMap::new();
        let mut finalized = HashSet::new();
        let mut frontier = BinaryHeap::from([Reverse((0_u64, source))]);

        while let Some(Reverse((dist, current))) = frontier.pop() {
            if !finalized.insert(current) {
                continue;
            }
            for (neighbor, weight) in graph.outgoing_edges(current) {
                let neighbor = neighbor.as_str();
                let candidate = dist + u64::from(*weight);
                match distances.get(neighbor).copied() {
                    Some(best) if candidate > best => {}
                    Some(best) if candidate == best => {
                        predecessors.entry(neighbor).or_default().push(current);
                    }
                    _ => {
                        distances.insert(neighbor, candidate);
                        predecessors.insert(neighbor, vec![current]);
                        frontier.push(Reverse((candidate, neighbor)));
                    }
                }
            }
        }

        debug!(
            "shortest-path tree from {source}: {} reachable vertices",
            distances.len() - 1
        );
        Some(Self {
            source,
            distances,
            predecessors,
        })
    }

    #[must_use]
    pub fn source(&self) -> &'g str {
        self.source
    }

    /// Minimum total weight to `target`, `None` if unreachable or unknown.
    #[must_use]
    pub fn distance(&self, target: &str) -> Option<u64> {
        self.distances.get(fold(target).as_ref()).copied()
    }

    /// Every shortest path to `target`, each ordered source first.
    #[must_use]
    pub fn paths_to(&self, target: &str) -> Vec<Vec<&'g str>> {
        let Some((&target, _)) = self.distances.get_key_value(fold(target).as_ref()) else {
            return Vec::new();
        };
        let mut paths = Vec::new();
        let mut buffer = Vec::new();
        self.backtrack(target, &mut buffer, &mut paths);
        paths
    }

    /// Walks predecessor lists back to the source; every arrival emits a path.
    fn backtrack(&self, node: &'g str, buffer: &mut Vec<&'g str>, paths: &mut Vec<Vec<&'g str>>) {
        buffer.push(node);
        if node == self.source {
            paths.push(buffer.iter().rev().copied().collect());
        } else if let Some(preds) = self.predecessors.get(node) {
            for &pred in preds {
                self.backtrack(pred, buffer, paths);
            }
        }
        buffer.pop();
    }

    /// Reachable vertices other than the source, in lexicographic order.
    #[must_use]
    pub fn reachable(&self) -> Vec<&'g str> {
        let mut targets: Vec<_> = self
            .distances
            .keys()
            .copied()
            .filter(|v| *v != self.source)
            .collect();
        targets.sort_unstable();
        targets
    }

    /// Bundles distance and paths for `target`, if reachable.
    #[must_use]
    pub fn routes_to(&self, target: &str) -> Option<ShortestPaths<'g>> {
        let (&target, &distance) = self.distances.get_key_value(fold(target).as_ref())?;
        Some(ShortestPaths {
            source: self.source,
            target,
            distance,
            paths: self.paths_to(target),
        })
    }
}

/// Sum of edge weights along `path`. Missing edges count as 0.
#[must_use]
pub fn path_cost(graph: &WordGraph, path: &[&str]) -> u64 {
    path.windows(2)
        .map(|pair| match pair {
            [a, b] => u64::from(graph.weight(a, b)),
            _ => 0,
        })
        .sum()
}

/// All minimum-weight paths between one pair of vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<'g> {
    pub source: &'g str,
    pub target: &'g str,
    pub distance: u64,
    pub paths: Vec<Vec<&'g str>>,
}

/// Outcome of a source-to-target query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathQuery<'g> {
    Missing(MissingWords),
    Unreachable { source: String, target: String },
    Found(ShortestPaths<'g>),
}

impl<'g> PathQuery<'g> {
    #[must_use]
    pub fn run(graph: &'g WordGraph, source: &str, target: &str) -> Self {
        if let Some(missing) = MissingWords::check(graph, source, target) {
            return Self::Missing(missing);
        }
        let routes = ShortestPathTree::build(graph, source).and_then(|tree| tree.routes_to(target));
        match routes {
            Some(found) => Self::Found(found),
            None => Self::Unreachable {
                source: fold(source).into_owned(),
                target: fold(target).into_owned(),
            },
        }
    }
}

/// Outcome of a single-source query: shortest paths to every reachable word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceQuery<'g> {
    Missing { word: String },
    Found {
        source: &'g str,
        routes: Vec<ShortestPaths<'g>>,
    },
}

impl<'g> SourceQuery<'g> {
    /// Builds one tree and reconstructs paths for each reachable target.
    #[must_use]
    pub fn run(graph: &'g WordGraph, source: &str) -> Self {
        let Some(tree) = ShortestPathTree::build(graph, source) else {
            return Self::Missing {
                word: source.to_string(),
            };
        };
        let routes = tree
            .reachable()
            .into_iter()
            .filter_map(|target| tree.routes_to(target))
            .collect();
        Self::Found {
            source: tree.source(),
            routes,
        }
    }
}

impl fmt::Display for ShortestPaths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shortest path from \"{}\" to \"{}\" (length: {}):",
            self.source, self.target, self.distance
        )?;
        for (i, path) in self.paths.iter().enumerate() {
            write!(f, "\nPath {}: {}", i + 1, path.join(" → "))?;
        }
        Ok(())
    }
}

impl fmt::Display for PathQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(missing) => write!(f, "{missing}"),
            Self::Unreachable { source, target } => {
                write!(f, "No path from \"{source}\" to \"{target}\"!")
            }
            Self::Found(found) => write!(f, "{found}"),
        }
    }
}

const RULE: &str = "==================================";
const SEPARATOR: &str = "----------------------------------";

impl fmt::Display for SourceQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { word } => write!(f, "No \"{word}\" in the graph!"),
            Self::Found { source, routes } => {
                writeln!(f, "Shortest paths from \"{source}\" to all other words:")?;
                write!(f, "{RULE}")?;
                if routes.is_empty() {
                    write!(f, "\nNo other word is reachable.")?;
                }
                for route in routes {
                    write!(f, "\n{route}\n{SEPARATOR}")?;
                }
                Ok(())
            }
        }
    }
}
