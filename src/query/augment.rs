// src/query/augment.rs
//! Text augmentation: splice a random bridge word between adjacent words.

use rand::Rng;

use super::bridge;
use crate::graph::WordGraph;
use crate::tokens::Tokenizer;

/// Inserts bridge words into arbitrary text.
///
/// Owns its random source so callers decide between entropy and a fixed seed.
pub struct TextAugmenter<'g, R: Rng> {
    graph: &'g WordGraph,
    tokenizer: Tokenizer,
    rng: R,
}

impl<'g, R: Rng> TextAugmenter<'g, R> {
    pub fn new(graph: &'g WordGraph, tokenizer: Tokenizer, rng: R) -> Self {
        Self {
            graph,
            tokenizer,
            rng,
        }
    }

    /// Returns the tokenized input with a bridge word inserted between each
    /// adjacent pair that has one. Input of fewer than two words is returned
    /// verbatim.
    pub fn augment(&mut self, input: &str) -> String {
        let words = self.tokenizer.tokenize(input);
        let mut out = match words.as_slice() {
            [] | [_] => return input.to_string(),
            [first, ..] => first.clone(),
        };
        for pair in words.windows(2) {
            let [w1, w2] = pair else { continue };
            if let Some(bridge) = self.pick_bridge(w1, w2) {
                out.push(' ');
                out.push_str(bridge);
            }
            out.push(' ');
            out.push_str(w2);
        }
        out
    }

    fn pick_bridge(&mut self, w1: &str, w2: &str) -> Option<&'g str> {
        if !self.graph.contains_vertex(w1) || !self.graph.contains_vertex(w2) {
            return None;
        }
        let candidates = bridge::find(self.graph, w1, w2);
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..candidates.len());
        candidates.get(idx).copied()
    }
}
