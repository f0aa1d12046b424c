//! Console output for graphs, rankings, and query answers.
//!
//! Functions named `format_*` build the text and `print_*` send it to stdout.
//! Styling uses `colored`, which honours `NO_COLOR`.

use crate::graph::WordGraph;
use crate::query::{Ranking, Walk};
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

const RULE: &str = "===========";

/// The directed graph, one vertex per block with its sorted outgoing edges.
///
/// # Errors
/// Returns error if formatting fails.
pub fn format_graph(graph: &WordGraph) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", "Directed graph:".bold())?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Vertices: {}", graph.vertex_count())?;
    writeln!(out, "Edges: {}", graph.edge_count())?;

    for vertex in graph.vertices() {
        writeln!(out, "\nVertex: {}", vertex.cyan().bold())?;
        let edges = graph.outgoing_edges(vertex);
        if edges.is_empty() {
            writeln!(out, "  {}", "no outgoing edges".dimmed())?;
            continue;
        }
        writeln!(out, "  Outgoing edges:")?;
        for (target, weight) in edges {
            writeln!(out, "    → {target} (weight: {weight})")?;
        }
    }

    writeln!(out, "\n{RULE}")?;
    Ok(out)
}

/// Prints the directed graph to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_graph(graph: &WordGraph) -> Result<()> {
    print!("{}", format_graph(graph)?);
    Ok(())
}

#[must_use]
pub fn format_rank(word: &str, rank: f64) -> String {
    format!("PageRank of \"{word}\": {rank:.4}")
}

/// Every vertex, highest rank first.
///
/// # Errors
/// Returns error if formatting fails.
pub fn format_ranking(ranking: &Ranking) -> Result<String> {
    let mut out = String::new();
    let sorted = ranking.sorted();
    let width = sorted.iter().map(|(w, _)| w.len()).max().unwrap_or(4).max(4);

    writeln!(out, "{:>4}  {:<width$}  {}", "#", "Word", "PageRank")?;
    for (i, (word, rank)) in sorted.iter().enumerate() {
        let position = format!("{:>4}", i + 1);
        writeln!(out, "{}  {word:<width$}  {rank:.4}", position.dimmed())?;
    }

    let status = if ranking.converged {
        format!("converged after {} iterations", ranking.iterations).green()
    } else {
        format!("stopped at {} iterations without converging", ranking.iterations).yellow()
    };
    writeln!(out, "\n{} vertices, total {:.4}, {status}", ranking.len(), ranking.total())?;
    Ok(out)
}

/// # Errors
/// Returns error if formatting fails.
pub fn print_ranking(ranking: &Ranking) -> Result<()> {
    print!("{}", format_ranking(ranking)?);
    Ok(())
}

pub fn print_walk(walk: &Walk) {
    println!("{} {walk}", "Random walk:".bold());
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
