// src/analyzer.rs
//! Query surface over one ingested corpus.
//!
//! `TextAnalyzer` owns the graph, the term frequencies, and the random
//! generator shared by text augmentation and random walks. Every query
//! answers "not found" in its return value; only ingestion can fail.

use std::cell::OnceCell;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::Result;
use crate::graph::{Corpus, WordGraph};
use crate::query::{
    BridgeWords, PathQuery, RankConfig, RankEngine, Ranking, SourceQuery, TextAugmenter, Walk,
    WalkEngine,
};
use crate::tokens::Tokenizer;

/// Printed by the walk command when there is nothing to walk.
pub const EMPTY_GRAPH: &str = "The graph is empty!";

pub struct TextAnalyzer {
    corpus: Corpus,
    tokenizer: Tokenizer,
    rank_config: RankConfig,
    rng: StdRng,
    ranking: OnceCell<Ranking>,
}

impl TextAnalyzer {
    /// Wraps an already built corpus. The generator is seeded from
    /// `text.seed` when set, otherwise from OS entropy.
    #[must_use]
    pub fn new(corpus: Corpus, config: &Config) -> Self {
        let rng = match config.text.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            corpus,
            tokenizer: config.tokenizer(),
            rank_config: config.rank.to_rank_config(),
            rng,
            ranking: OnceCell::new(),
        }
    }

    /// Reads and ingests a corpus file.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if the file cannot be read.
    pub fn from_file(path: &Path, config: &Config) -> Result<Self> {
        let corpus = Corpus::from_file(path, &config.tokenizer())?;
        Ok(Self::new(corpus, config))
    }

    #[must_use]
    pub fn graph(&self) -> &WordGraph {
        &self.corpus.graph
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub fn bridge_words(&self, word1: &str, word2: &str) -> BridgeWords {
        BridgeWords::query(self.graph(), word1, word2)
    }

    #[must_use]
    pub fn query_bridge_words(&self, word1: &str, word2: &str) -> String {
        self.bridge_words(word1, word2).to_string()
    }

    /// Inserts a random bridge word between each adjacent pair of `input`.
    pub fn generate_new_text(&mut self, input: &str) -> String {
        TextAugmenter::new(&self.corpus.graph, self.tokenizer, &mut self.rng).augment(input)
    }

    #[must_use]
    pub fn path_query(&self, source: &str, target: &str) -> PathQuery<'_> {
        PathQuery::run(self.graph(), source, target)
    }

    #[must_use]
    pub fn source_query(&self, source: &str) -> SourceQuery<'_> {
        SourceQuery::run(self.graph(), source)
    }

    /// All shortest paths between two words. A missing or blank `target`
    /// switches to every word reachable from `source`.
    #[must_use]
    pub fn shortest_path(&self, source: &str, target: Option<&str>) -> String {
        match target.map(str::trim).filter(|t| !t.is_empty()) {
            Some(target) => self.path_query(source, target).to_string(),
            None => self.source_query(source).to_string(),
        }
    }

    /// Computed once, on first use.
    pub fn ranking(&self) -> &Ranking {
        self.ranking.get_or_init(|| {
            RankEngine::new(self.rank_config).compute(&self.corpus.graph, &self.corpus.frequency)
        })
    }

    /// `PageRank` of `word`, 0.0 when it is not in the graph.
    #[must_use]
    pub fn page_rank(&self, word: &str) -> f64 {
        self.ranking().rank(word)
    }

    /// `None` when the graph is empty.
    pub fn random_walk(&mut self) -> Option<Walk> {
        WalkEngine::new(&self.corpus.graph, &mut self.rng).walk()
    }

    /// The walk as text, or [`EMPTY_GRAPH`].
    pub fn random_walk_text(&mut self) -> String {
        self.random_walk()
            .map_or_else(|| EMPTY_GRAPH.to_string(), |walk| walk.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "The scientist carefully analyzed data. The scientist then shared results.";

    fn analyzer(text: &str) -> TextAnalyzer {
        let mut config = Config::new();
        config.text.seed = Some(42);
        TextAnalyzer::new(Corpus::from_text(text, &config.tokenizer()), &config)
    }

    #[test]
    fn test_bridge_query_text() {
        let a = analyzer(SAMPLE);
        assert_eq!(
            a.query_bridge_words("the", "carefully"),
            "The bridge word from \"the\" to \"carefully\" is: \"scientist\"."
        );
        assert_eq!(a.query_bridge_words("foo", "data"), "No \"foo\" in the graph!");
    }

    #[test]
    fn test_blank_target_is_single_source() {
        let a = analyzer("a b c");
        assert_eq!(a.shortest_path("a", Some("  ")), a.shortest_path("a", None));
        assert!(a.shortest_path("a", None).starts_with("Shortest paths from \"a\""));
    }

    #[test]
    fn test_ranking_is_cached() {
        let a = analyzer(SAMPLE);
        let first: *const Ranking = a.ranking();
        let second: *const Ranking = a.ranking();
        assert_eq!(first, second);
        assert!(a.page_rank("unknown").abs() < f64::EPSILON);
    }

    #[test]
    fn test_seed_makes_walks_repeatable() {
        let mut a = analyzer(SAMPLE);
        let mut b = analyzer(SAMPLE);
        for _ in 0..5 {
            assert_eq!(a.random_walk(), b.random_walk());
        }
    }

    #[test]
    fn test_empty_graph_walk_message() {
        let mut a = analyzer("");
        assert_eq!(a.random_walk_text(), EMPTY_GRAPH);
    }

    #[test]
    fn test_generate_keeps_unknown_pairs() {
        let mut a = analyzer(SAMPLE);
        assert_eq!(a.generate_new_text("hello world"), "hello world");
        assert_eq!(
            a.generate_new_text("the carefully"),
            "the scientist carefully"
        );
    }
}
