// src/export/mod.rs
//! File export of the graph for visualization.
//!
//! The DOT text is built in memory by [`dot`] and written here. Turning it
//! into an image is left to Graphviz ([`render`]).

pub mod dot;
pub mod render;

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;

pub use dot::{default_path_file, graph_to_dot, paths_to_dot};
pub use render::{graphviz_available, render_image};

/// Writes the full graph to `path`.
///
/// # Errors
/// Returns `GraphError::Io` if the file cannot be written.
pub fn export_graph(graph: &WordGraph, path: &Path) -> Result<()> {
    write_dot(&graph_to_dot(graph), path)
}

/// Writes the graph with `paths` from `source` to `target` highlighted.
///
/// # Errors
/// Returns `GraphError::Io` if the file cannot be written.
pub fn export_paths(
    graph: &WordGraph,
    source: &str,
    target: &str,
    paths: &[Vec<&str>],
    path: &Path,
) -> Result<()> {
    write_dot(&paths_to_dot(graph, source, target, paths), path)
}

fn write_dot(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).map_err(|e| GraphError::io(e, path))?;
    info!("Exported DOT file to {}", path.display());
    Ok(())
}
