// src/graph/builder.rs
//! Corpus ingestion: token stream to graph plus frequency table.

use std::fs;
use std::path::Path;

use log::info;

use super::frequency::WordFrequency;
use super::word_graph::WordGraph;
use crate::error::{GraphError, Result};
use crate::tokens::Tokenizer;

/// A built graph together with the frequencies of the tokens that built it.
///
/// Both halves are filled from the same token stream in a single pass and are
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub graph: WordGraph,
    pub frequency: WordFrequency,
}

impl Corpus {
    /// Builds from an already tokenized word sequence.
    #[must_use]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut corpus = Self::default();
        for token in tokens {
            corpus.frequency.record_token(token.as_ref());
        }
        match tokens {
            [] => {}
            [only] => corpus.graph.add_vertex(only.as_ref()),
            _ => {
                for pair in tokens.windows(2) {
                    if let [source, target] = pair {
                        corpus.graph.add_edge(source.as_ref(), target.as_ref());
                    }
                }
            }
        }
        corpus
    }

    /// Tokenizes `text` and builds from the resulting words.
    #[must_use]
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::from_tokens(&tokenizer.tokenize(text))
    }

    /// Reads and ingests a corpus file.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if the file cannot be read as UTF-8 text.
    pub fn from_file(path: &Path, tokenizer: &Tokenizer) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::io(e, path))?;
        let corpus = Self::from_text(&content, tokenizer);
        info!(
            "ingested {}: {} tokens, {} vertices, {} edges",
            path.display(),
            corpus.frequency.total(),
            corpus.graph.vertex_count(),
            corpus.graph.edge_count()
        );
        Ok(corpus)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}
