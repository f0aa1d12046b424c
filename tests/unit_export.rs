// tests/unit_export.rs
use anyhow::Result;
use std::fs;
use wordgraph_core::config::ExportConfig;
use wordgraph_core::error::GraphError;
use wordgraph_core::export;
use wordgraph_core::graph::Corpus;
use wordgraph_core::query::PathQuery;
use wordgraph_core::tokens::Tokenizer;

fn corpus() -> Corpus {
    Corpus::from_text("a b c a c a b", &Tokenizer::new())
}

#[test]
fn test_graph_export_lists_every_edge() -> Result<()> {
    let c = corpus();
    let d = tempfile::tempdir()?;
    let path = d.path().join("graph.dot");
    export::export_graph(&c.graph, &path)?;

    let dot = fs::read_to_string(&path)?;
    assert!(dot.starts_with("digraph TextGraph {"));
    let edge_lines = dot.lines().filter(|l| l.contains("->")).count();
    assert_eq!(edge_lines, c.graph.edge_count());
    assert!(dot.contains("\"a\" -> \"b\" [label=\"2\""));
    Ok(())
}

#[test]
fn test_path_export_highlights_shortest_path() -> Result<()> {
    let c = corpus();
    let PathQuery::Found(found) = PathQuery::run(&c.graph, "b", "a") else {
        panic!("b reaches a");
    };
    let d = tempfile::tempdir()?;
    let path = d.path().join(export::default_path_file(found.source, found.target));
    export::export_paths(&c.graph, found.source, found.target, &found.paths, &path)?;

    let dot = fs::read_to_string(&path)?;
    assert!(path.ends_with("path_b_to_a.dot"));
    assert!(dot.contains("\"b\" [fillcolor=gold];"));
    assert!(dot.contains("\"a\" [fillcolor=gold];"));
    assert!(dot.contains("color=\"red\", penwidth=2.0"));
    assert!(dot.contains("subgraph cluster_legend"));
    Ok(())
}

#[test]
fn test_render_without_graphviz_fails_cleanly() -> Result<()> {
    let d = tempfile::tempdir()?;
    let dot = d.path().join("g.dot");
    export::export_graph(&corpus().graph, &dot)?;
    let config = ExportConfig {
        dot_command: "wordgraph-missing-dot".to_string(),
        ..ExportConfig::default()
    };

    let err = export::render_image(&config, &dot, &d.path().join("g.png")).err();
    assert!(matches!(err, Some(GraphError::Render(_))));
    assert!(!d.path().join("g.png").exists());
    Ok(())
}
