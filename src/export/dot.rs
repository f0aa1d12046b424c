// src/export/dot.rs
//! Graphviz DOT serialization of the word graph.

use std::collections::HashSet;
use std::fmt::Write;
use std::path::PathBuf;

use crate::graph::WordGraph;

/// Edge colours for highlighted paths, cycled when there are more paths.
pub const PATH_COLORS: [&str; 6] = ["red", "blue", "green", "purple", "orange", "brown"];

const HEADER: &str = "digraph TextGraph {\n  rankdir=LR;\n  node [shape=ellipse, style=filled, fillcolor=lightblue];\n";

/// Escapes a word for use inside a quoted DOT identifier.
#[must_use]
pub fn escape(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Heavier edges are drawn thicker, capped at 3.0.
#[must_use]
pub fn pen_width(weight: u32) -> f64 {
    (0.5 * f64::from(weight) + 0.5).min(3.0)
}

/// The whole graph. Vertices and edges come out in sorted order.
#[must_use]
pub fn graph_to_dot(graph: &WordGraph) -> String {
    let mut out = String::from(HEADER);
    for vertex in graph.vertices() {
        let _ = writeln!(out, "  \"{}\";", escape(vertex));
    }
    for (source, target, weight) in graph.edges() {
        let _ = write!(out, "  \"{}\" -> \"{}\" ", escape(source), escape(target));
        let _ = writeln!(out, "{};", edge_style(weight));
    }
    out.push_str("}\n");
    out
}

fn edge_style(weight: u32) -> String {
    if weight > 1 {
        format!(
            "[label=\"{weight}\", penwidth={:.1}, color=\"blue\"]",
            pen_width(weight)
        )
    } else {
        "[color=\"gray\"]".to_string()
    }
}

/// The whole graph with `paths` highlighted.
///
/// `source` and `target` are filled gold and other vertices on any path
/// light green. An edge on several paths takes the colour of the first.
#[must_use]
pub fn paths_to_dot(graph: &WordGraph, source: &str, target: &str, paths: &[Vec<&str>]) -> String {
    let on_path: HashSet<&str> = paths.iter().flatten().copied().collect();

    let mut out = String::from(HEADER);
    for vertex in graph.vertices() {
        let name = escape(vertex);
        if vertex == source || vertex == target {
            let _ = writeln!(out, "  \"{name}\" [fillcolor=gold];");
        } else if on_path.contains(vertex) {
            let _ = writeln!(out, "  \"{name}\" [fillcolor=lightgreen];");
        } else {
            let _ = writeln!(out, "  \"{name}\";");
        }
    }

    for (from, to, weight) in graph.edges() {
        let _ = write!(out, "  \"{}\" -> \"{}\" ", escape(from), escape(to));
        match path_index(paths, from, to) {
            Some(i) => {
                let color = PATH_COLORS[i % PATH_COLORS.len()];
                let _ = writeln!(
                    out,
                    "[label=\"{weight}\", color=\"{color}\", penwidth=2.0];"
                );
            }
            None => {
                let _ = writeln!(out, "{};", edge_style(weight));
            }
        }
    }

    write_legend(&mut out, paths.len());
    out.push_str("}\n");
    out
}

fn path_index(paths: &[Vec<&str>], from: &str, to: &str) -> Option<usize> {
    paths.iter().position(|path| {
        path.windows(2)
            .any(|pair| matches!(pair, [a, b] if *a == from && *b == to))
    })
}

fn write_legend(out: &mut String, path_count: usize) {
    out.push_str("  subgraph cluster_legend {\n");
    out.push_str("    label=\"Path legend\";\n    style=filled;\n    color=lightgrey;\n");
    for (i, color) in PATH_COLORS.iter().enumerate().take(path_count) {
        let n = i + 1;
        let _ = writeln!(
            out,
            "    \"Path {n}\" [shape=plaintext, fillcolor=white, label=\"Path {n}\"];"
        );
        let _ = writeln!(
            out,
            "    \"Color {n}\" [shape=point, fillcolor={color}, color={color}, width=0.3];"
        );
        let _ = writeln!(out, "    \"Path {n}\" -> \"Color {n}\" [style=invis];");
    }
    out.push_str("  }\n");
}

/// `path_<source>_to_<target>.dot`
#[must_use]
pub fn default_path_file(source: &str, target: &str) -> PathBuf {
    PathBuf::from(format!("path_{source}_to_{target}.dot"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> WordGraph {
        let mut g = WordGraph::new();
        for (a, b) in [("a", "b"), ("a", "b"), ("b", "c"), ("a", "c")] {
            g.add_edge(a, b);
        }
        g
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
    }

    #[test]
    fn test_pen_width_caps() {
        assert!((pen_width(2) - 1.5).abs() < f64::EPSILON);
        assert!((pen_width(10) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_graph_dot_layout() {
        let dot = graph_to_dot(&graph());
        assert!(dot.starts_with("digraph TextGraph {\n  rankdir=LR;"));
        assert!(dot.contains("  \"a\" -> \"b\" [label=\"2\", penwidth=1.5, color=\"blue\"];"));
        assert!(dot.contains("  \"b\" -> \"c\" [color=\"gray\"];"));
        assert!(dot.trim_end().ends_with('}'));
        let a_b = dot.find("\"a\" -> \"b\"");
        let a_c = dot.find("\"a\" -> \"c\"");
        assert!(a_b < a_c);
    }

    #[test]
    fn test_paths_highlighted() {
        let paths = vec![vec!["a", "c"], vec!["a", "b", "c"]];
        let dot = paths_to_dot(&graph(), "a", "c", &paths);
        assert!(dot.contains("  \"a\" [fillcolor=gold];"));
        assert!(dot.contains("  \"c\" [fillcolor=gold];"));
        assert!(dot.contains("  \"b\" [fillcolor=lightgreen];"));
        assert!(dot.contains("\"a\" -> \"c\" [label=\"1\", color=\"red\", penwidth=2.0];"));
        assert!(dot.contains("\"b\" -> \"c\" [label=\"1\", color=\"blue\", penwidth=2.0];"));
        assert!(dot.contains("\"Color 2\" [shape=point, fillcolor=blue"));
        assert!(!dot.contains("\"Path 3\""));
    }

    #[test]
    fn test_default_path_file() {
        assert_eq!(
            default_path_file("the", "shared"),
            PathBuf::from("path_the_to_shared.dot")
        );
    }
}
