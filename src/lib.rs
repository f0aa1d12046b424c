pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod export;
pub mod graph;
pub mod query;
pub mod reporting;
pub mod tokens;
