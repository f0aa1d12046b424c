// src/tokens.rs
//! Corpus and query tokenization.
//!
//! Text is lower-cased and every run of characters outside `a-z` becomes a
//! single word boundary. Both the corpus and augmenter input go through here
//! so the two always agree on what a word is.

use std::sync::LazyLock;

use regex::Regex;

static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]+").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Contraction rewrites, applied in order before letter filtering.
static CONTRACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"'re", " are"),
        (r"'ve", " have"),
        (r"'ll", " will"),
        (r"'d", " would"),
        (r"n't", " not"),
        (r"'s", ""),
    ]
    .into_iter()
    .map(|(pat, rep)| (Regex::new(pat).unwrap_or_else(|_| panic!("Invalid Regex")), rep))
    .collect()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    expand_contractions: bool,
}

impl Tokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands English contractions (`don't` -> `do not`) before splitting.
    #[must_use]
    pub fn with_contractions(mut self, enabled: bool) -> Self {
        self.expand_contractions = enabled;
        self
    }

    /// Splits `text` into lowercase alphabetic words.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut lowered = text.to_lowercase();
        if self.expand_contractions {
            lowered = expand(&lowered);
        }
        NON_LETTERS
            .split(&lowered)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn expand(text: &str) -> String {
    CONTRACTIONS
        .iter()
        .fold(text.to_string(), |acc, (re, rep)| re.replace_all(&acc, *rep).into_owned())
}
