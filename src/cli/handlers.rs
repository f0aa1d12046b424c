// src/cli/handlers.rs
use crate::analyzer::{TextAnalyzer, EMPTY_GRAPH};
use crate::config::Config;
use crate::error::GraphError;
use crate::exit::WordGraphExit;
use crate::export;
use crate::query::PathQuery;
use crate::reporting;
use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Handles the show command.
///
/// # Errors
/// Returns error if output formatting fails.
pub fn handle_show(analyzer: &TextAnalyzer, json: bool) -> Result<WordGraphExit> {
    if json {
        reporting::print_json(analyzer.graph())?;
    } else {
        reporting::print_graph(analyzer.graph())?;
    }
    Ok(WordGraphExit::Success)
}

/// Handles the bridge command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_bridge(
    analyzer: &TextAnalyzer,
    word1: &str,
    word2: &str,
    json: bool,
) -> Result<WordGraphExit> {
    let answer = analyzer.bridge_words(word1, word2);
    if json {
        reporting::print_json(&answer)?;
    } else {
        println!("{answer}");
    }
    Ok(WordGraphExit::Success)
}

/// Handles the generate command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_generate(
    analyzer: &mut TextAnalyzer,
    text: &[String],
    json: bool,
) -> Result<WordGraphExit> {
    let input = text.join(" ");
    let generated = analyzer.generate_new_text(&input);
    if json {
        reporting::print_json(&serde_json::json!({ "input": input, "generated": generated }))?;
    } else {
        println!("{} {generated}", "Generated text:".bold());
    }
    Ok(WordGraphExit::Success)
}

/// Handles the path command. Without a target, reports every reachable word.
///
/// # Errors
/// Returns error if serialization or the DOT export fails.
pub fn handle_path(
    analyzer: &TextAnalyzer,
    source: &str,
    target: Option<&str>,
    dot_output: Option<&Path>,
    json: bool,
) -> Result<WordGraphExit> {
    let Some(target) = target.map(str::trim).filter(|t| !t.is_empty()) else {
        let query = analyzer.source_query(source);
        if json {
            reporting::print_json(&query)?;
        } else {
            println!("{query}");
        }
        return Ok(WordGraphExit::Success);
    };

    let query = analyzer.path_query(source, target);
    if json {
        reporting::print_json(&query)?;
    } else {
        println!("{query}");
    }

    if let Some(requested) = dot_output {
        export_path_dot(analyzer, &query, requested)?;
    }
    Ok(WordGraphExit::Success)
}

fn export_path_dot(analyzer: &TextAnalyzer, query: &PathQuery, requested: &Path) -> Result<()> {
    let PathQuery::Found(found) = query else {
        warn!("No path to highlight; DOT export skipped");
        return Ok(());
    };
    let file = if requested.as_os_str().is_empty() {
        export::default_path_file(found.source, found.target)
    } else {
        requested.to_path_buf()
    };
    export::export_paths(analyzer.graph(), found.source, found.target, &found.paths, &file)?;
    eprintln!("{} {}", "Exported paths to".green(), file.display());
    Ok(())
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if output formatting fails.
pub fn handle_rank(
    analyzer: &TextAnalyzer,
    word: Option<&str>,
    all: bool,
    json: bool,
) -> Result<WordGraphExit> {
    if all {
        if json {
            reporting::print_json(analyzer.ranking())?;
        } else {
            reporting::print_ranking(analyzer.ranking())?;
        }
        return Ok(WordGraphExit::Success);
    }

    let Some(word) = word else {
        eprintln!("{}", "rank needs a word or --all".red());
        return Ok(WordGraphExit::InvalidInput);
    };
    let rank = analyzer.page_rank(word);
    if json {
        reporting::print_json(&serde_json::json!({ "word": word, "rank": rank }))?;
    } else {
        println!("{}", reporting::format_rank(word, rank));
    }
    Ok(WordGraphExit::Success)
}

/// Handles the walk command. `save` is the CLI request; `config.walk.save`
/// turns saving on by default.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_walk(
    analyzer: &mut TextAnalyzer,
    save: Option<Option<PathBuf>>,
    config: &Config,
    json: bool,
) -> Result<WordGraphExit> {
    let Some(walk) = analyzer.random_walk() else {
        println!("{EMPTY_GRAPH}");
        return Ok(WordGraphExit::Success);
    };

    if json {
        reporting::print_json(&walk)?;
    } else {
        reporting::print_walk(&walk);
    }

    let target = match save {
        Some(Some(path)) => Some(path),
        Some(None) => Some(config.walk.output_path.clone()),
        None => config.walk.save.then(|| config.walk.output_path.clone()),
    };
    let Some(target) = target else {
        return Ok(WordGraphExit::Success);
    };

    match walk.save(&target) {
        Ok(()) => {
            info!("Saved random walk to {}", target.display());
            eprintln!("{} {}", "Saved walk to".green(), target.display());
            Ok(WordGraphExit::Success)
        }
        Err(e) => {
            warn!("Could not save random walk: {e}");
            eprintln!("{} {e}", "error:".red());
            Ok(WordGraphExit::Error)
        }
    }
}

/// Handles the export command.
///
/// # Errors
/// Returns error if the DOT file cannot be written.
pub fn handle_export(
    analyzer: &TextAnalyzer,
    config: &Config,
    dot: Option<PathBuf>,
    render: bool,
    image: Option<PathBuf>,
) -> Result<WordGraphExit> {
    let dot_file = dot.unwrap_or_else(|| config.export.dot_path.clone());
    export::export_graph(analyzer.graph(), &dot_file)
        .with_context(|| format!("Failed to export graph to {}", dot_file.display()))?;
    println!("{} {}", "Exported graph to".green(), dot_file.display());

    if !render {
        return Ok(WordGraphExit::Success);
    }

    let image_file = image.unwrap_or_else(|| config.export.image_path.clone());
    match export::render_image(&config.export, &dot_file, &image_file) {
        Ok(()) => {
            println!("{} {}", "Rendered image to".green(), image_file.display());
            Ok(WordGraphExit::Success)
        }
        Err(e @ GraphError::Render(_)) => {
            eprintln!("{} {e}", "error:".red());
            Ok(WordGraphExit::RenderFailure)
        }
        Err(e) => Err(e.into()),
    }
}
