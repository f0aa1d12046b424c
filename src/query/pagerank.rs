// src/query/pagerank.rs
//! `PageRank` over the word graph, optionally seeded from term frequencies.
//!
//! Rank held by dangling vertices (no outgoing edges) is dropped each
//! iteration rather than redistributed, so totals can fall below 1.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::{fold, WordFrequency, WordGraph};

pub const DAMPING: f64 = 0.85;
pub const MAX_ITERATIONS: usize = 100;
pub const TOLERANCE: f64 = 0.0001;

/// How the rank vector is seeded before iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankInit {
    /// `1/N` for every vertex.
    Uniform,
    /// Term frequency scaled by a degree-based inverse-frequency factor.
    #[default]
    TfIdf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub init: RankInit,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            max_iterations: MAX_ITERATIONS,
            tolerance: TOLERANCE,
            init: RankInit::default(),
        }
    }
}

/// Final rank per vertex plus how the iteration ended.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ranking {
    scores: BTreeMap<String, f64>,
    pub iterations: usize,
    pub converged: bool,
}

impl Ranking {
    /// Rank of `word`, or 0.0 when it is not a vertex.
    #[must_use]
    pub fn rank(&self, word: &str) -> f64 {
        self.scores.get(fold(word).as_ref()).copied().unwrap_or(0.0)
    }

    /// All scores, highest first. Equal scores fall back to word order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.scores.iter().map(|(w, r)| (w.as_str(), *r)).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(a.0.cmp(b.0)));
        ranked
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Vertex-indexed view of the graph, built once per computation.
struct Topology<'g> {
    vertices: Vec<&'g str>,
    incoming: Vec<Vec<usize>>,
    out_degree: Vec<usize>,
}

impl<'g> Topology<'g> {
    fn new(graph: &'g WordGraph) -> Self {
        let vertices: Vec<&str> = graph.vertices().collect();
        let index: HashMap<&str, usize> = vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        let incoming = vertices
            .iter()
            .map(|v| {
                graph
                    .incoming_vertices(v)
                    .into_iter()
                    .filter_map(|u| index.get(u).copied())
                    .collect()
            })
            .collect();
        let out_degree = vertices.iter().map(|v| graph.out_degree(v)).collect();
        Self {
            vertices,
            incoming,
            out_degree,
        }
    }
}

pub struct RankEngine {
    config: RankConfig,
}

impl RankEngine {
    #[must_use]
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    /// Iterates until the largest per-vertex change drops below the
    /// tolerance or the iteration budget runs out.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(&self, graph: &WordGraph, frequency: &WordFrequency) -> Ranking {
        let topology = Topology::new(graph);
        let n = topology.vertices.len();
        if n == 0 {
            return Ranking::default();
        }
        if n == 1 {
            // A lone vertex holds all the rank.
            return collect(&topology, &[1.0], 0, true);
        }

        let mut ranks = match self.config.init {
            RankInit::Uniform => uniform(n),
            RankInit::TfIdf => tf_idf(graph, frequency, &topology),
        };

        for iteration in 0..self.config.max_iterations {
            let next = iterate_once(&ranks, &topology, self.config.damping);
            let max_delta = max_difference(&ranks, &next);
            ranks = next;
            if max_delta < self.config.tolerance {
                debug!("PageRank converged after {} iterations", iteration + 1);
                return collect(&topology, &ranks, iteration + 1, true);
            }
        }

        debug!(
            "PageRank stopped at the {}-iteration cap without converging",
            self.config.max_iterations
        );
        collect(&topology, &ranks, self.config.max_iterations, false)
    }
}

#[allow(clippy::cast_precision_loss)]
fn uniform(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}

/// Seeds from `tf * idf`, normalized to sum to 1. Falls back to uniform when
/// no vertex has a recorded frequency.
#[allow(clippy::cast_precision_loss)]
fn tf_idf(graph: &WordGraph, frequency: &WordFrequency, topology: &Topology) -> Vec<f64> {
    let n = topology.vertices.len() as f64;
    let scores: Vec<f64> = topology
        .vertices
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let tf = frequency.term_frequency(v);
            let degree = topology.incoming.get(i).map_or(0, Vec::len) + graph.out_degree(v);
            let idf = if degree > 0 {
                (n / (1.0 + degree as f64)).log10().max(0.5)
            } else {
                1.0
            };
            tf * idf
        })
        .collect();

    let total: f64 = scores.iter().sum();
    if total <= 0.0 {
        return uniform(topology.vertices.len());
    }
    scores.into_iter().map(|s| s / total).collect()
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once(ranks: &[f64], topology: &Topology, damping: f64) -> Vec<f64> {
    let base = (1.0 - damping) / ranks.len() as f64;
    topology
        .incoming
        .iter()
        .map(|sources| base + damping * compute_incoming_rank(sources, ranks, topology))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank(sources: &[usize], ranks: &[f64], topology: &Topology) -> f64 {
    sources
        .iter()
        .filter_map(|&u| {
            let degree = topology.out_degree.get(u).copied().unwrap_or(0);
            let rank = ranks.get(u).copied()?;
            (degree > 0).then(|| rank / degree as f64)
        })
        .sum()
}

fn max_difference(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

fn collect(topology: &Topology, ranks: &[f64], iterations: usize, converged: bool) -> Ranking {
    Ranking {
        scores: topology
            .vertices
            .iter()
            .zip(ranks)
            .map(|(v, r)| ((*v).to_string(), *r))
            .collect(),
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Corpus;

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::from_tokens(words)
    }

    fn uniform_engine() -> RankEngine {
        RankEngine::new(RankConfig {
            init: RankInit::Uniform,
            ..RankConfig::default()
        })
    }

    #[test]
    fn test_isolated_vertex_ranks_one() {
        let c = corpus(&["x"]);
        let r = RankEngine::new(RankConfig::default()).compute(&c.graph, &c.frequency);
        assert!((r.rank("x") - 1.0).abs() < 1e-12);
        assert!((r.rank("X") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_graph() {
        let c = corpus(&[]);
        let r = RankEngine::new(RankConfig::default()).compute(&c.graph, &c.frequency);
        assert!(r.is_empty());
        assert!(r.rank("x").abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_word_is_zero() {
        let c = corpus(&["a", "b", "a"]);
        let r = uniform_engine().compute(&c.graph, &c.frequency);
        assert!(r.rank("nope").abs() < f64::EPSILON);
    }

    #[test]
    fn test_symmetric_cycle_is_uniform() {
        let c = corpus(&["a", "b", "c", "a"]);
        let r = uniform_engine().compute(&c.graph, &c.frequency);
        for w in ["a", "b", "c"] {
            assert!((r.rank(w) - 1.0 / 3.0).abs() < 1e-9, "{w}: {}", r.rank(w));
        }
        assert!(r.converged);
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn test_dangling_mass_is_dropped() {
        // a -> b, b has no outgoing edges.
        let c = corpus(&["a", "b"]);
        let r = uniform_engine().compute(&c.graph, &c.frequency);
        assert!((r.rank("a") - 0.075).abs() < 1e-9);
        // 0.075 + 0.85 * 0.075
        assert!((r.rank("b") - 0.13875).abs() < 1e-9);
        assert!(r.total() < 1.0);
    }

    #[test]
    fn test_hub_outranks_leaves() {
        let c = corpus(&["x", "hub", "y", "hub", "z", "hub", "x"]);
        let r = uniform_engine().compute(&c.graph, &c.frequency);
        let sorted = r.sorted();
        assert_eq!(sorted.first().map(|(w, _)| *w), Some("hub"));
    }

    #[test]
    fn test_seed_does_not_move_fixed_point() {
        let c = Corpus::from_text(
            "The scientist carefully analyzed data. The scientist then shared results.",
            &crate::tokens::Tokenizer::new(),
        );
        let tight = RankConfig {
            tolerance: 1e-12,
            max_iterations: 1000,
            ..RankConfig::default()
        };
        let tf = RankEngine::new(tight).compute(&c.graph, &c.frequency);
        let un = RankEngine::new(RankConfig {
            init: RankInit::Uniform,
            ..tight
        })
        .compute(&c.graph, &c.frequency);
        assert!(tf.converged && un.converged);
        for w in c.graph.vertices() {
            assert!((0.0..=1.0).contains(&tf.rank(w)));
            assert!((tf.rank(w) - un.rank(w)).abs() < 1e-9, "{w}");
        }
    }

    #[test]
    fn test_iteration_cap_reported() {
        let c = corpus(&["a", "b", "a", "c"]);
        let engine = RankEngine::new(RankConfig {
            max_iterations: 1,
            tolerance: 0.0,
            init: RankInit::Uniform,
            ..RankConfig::default()
        });
        let r = engine.compute(&c.graph, &c.frequency);
        assert!(!r.converged);
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn test_tfidf_seed_after_one_iteration() {
        // hub -> l1..l4 plus 15 isolated words: N = 20.
        let mut g = WordGraph::new();
        let mut freq = WordFrequency::new();
        let leaves = ["l1", "l2", "l3", "l4"];
        for leaf in leaves {
            g.add_edge("hub", leaf);
            freq.record_token(leaf);
        }
        for _ in 0..3 {
            freq.record_token("hub");
        }
        for i in 0..15 {
            let word = format!("iso{i}");
            g.add_vertex(&word);
            freq.record_token(&word);
        }
        assert_eq!(g.vertex_count(), 20);

        let one_step = RankConfig {
            max_iterations: 1,
            tolerance: 0.0,
            ..RankConfig::default()
        };
        let r = RankEngine::new(one_step).compute(&g, &freq);

        // Seed: tf(hub) = 3/22 with idf log10(20 / 5); every other word has
        // tf 1/22 and idf 1.0 (log10(20 / 2) for leaves, isolated otherwise).
        let hub_score = 3.0 * 4.0_f64.log10();
        let seed_hub = hub_score / (hub_score + 19.0);
        let expected_leaf = 0.15 / 20.0 + 0.85 * seed_hub / 4.0;
        assert!((seed_hub - 0.086_809_78).abs() < 1e-7);
        for leaf in leaves {
            assert!((r.rank(leaf) - expected_leaf).abs() < 1e-12, "{leaf}");
            assert!((r.rank(leaf) - 0.025_947_08).abs() < 1e-7);
        }
        assert!((r.rank("hub") - 0.0075).abs() < 1e-12);
        assert!((r.rank("iso0") - 0.0075).abs() < 1e-12);
        assert!(!r.converged);

        let uniform = RankEngine::new(RankConfig {
            init: RankInit::Uniform,
            ..one_step
        })
        .compute(&g, &freq);
        assert!((uniform.rank("l1") - 0.018_125).abs() < 1e-12);
    }

    #[test]
    fn test_tfidf_without_frequencies_falls_back() {
        let mut g = WordGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "a");
        let r = RankEngine::new(RankConfig::default()).compute(&g, &WordFrequency::new());
        assert!((r.rank("a") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_breaks_ties_by_word() {
        let c = corpus(&["b", "a", "b"]);
        let r = uniform_engine().compute(&c.graph, &c.frequency);
        let words: Vec<_> = r.sorted().into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["a", "b"]);
    }
}
