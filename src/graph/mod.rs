// src/graph/mod.rs
pub mod builder;
pub mod frequency;
pub mod word_graph;

pub use builder::Corpus;
pub use frequency::WordFrequency;
pub use word_graph::{fold, WordGraph};
