//! Command dispatch: config, corpus ingestion, then the subcommand handler.

use super::args::{Cli, Commands};
use super::handlers::{
    handle_bridge, handle_export, handle_generate, handle_path, handle_rank, handle_show,
    handle_walk,
};
use crate::analyzer::TextAnalyzer;
use crate::config::Config;
use crate::error::GraphError;
use crate::exit::WordGraphExit;
use crate::query::RankInit;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if the corpus cannot be read or a handler fails.
pub fn execute(cli: Cli) -> Result<WordGraphExit> {
    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e @ (GraphError::Config { .. } | GraphError::InvalidConfig(_))) => {
            eprintln!("{} {e}", "error:".red());
            return Ok(WordGraphExit::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    };
    if let Commands::Rank { uniform: true, .. } = cli.command {
        config.rank.init = RankInit::Uniform;
    }

    let mut analyzer = TextAnalyzer::from_file(&cli.file, &config)
        .with_context(|| format!("Failed to read corpus {}", cli.file.display()))?;
    if analyzer.graph().is_empty() {
        eprintln!(
            "{} {} contains no words",
            "error:".red(),
            cli.file.display()
        );
        return Ok(WordGraphExit::InvalidInput);
    }

    run_command(cli.command, &mut analyzer, &config, cli.json)
}

fn load_config(cli: &Cli) -> crate::error::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.seed.is_some() {
        config.text.seed = cli.seed;
    }
    Ok(config)
}

fn run_command(
    command: Commands,
    analyzer: &mut TextAnalyzer,
    config: &Config,
    json: bool,
) -> Result<WordGraphExit> {
    match command {
        Commands::Show => handle_show(analyzer, json),
        Commands::Bridge { word1, word2 } => handle_bridge(analyzer, &word1, &word2, json),
        Commands::Generate { text } => handle_generate(analyzer, &text, json),
        Commands::Path {
            source,
            target,
            export,
            output,
        } => {
            let dot_output = export.then(|| output.unwrap_or_else(PathBuf::new));
            handle_path(analyzer, &source, target.as_deref(), dot_output.as_deref(), json)
        }
        Commands::Rank { word, all, .. } => handle_rank(analyzer, word.as_deref(), all, json),
        Commands::Walk { save } => handle_walk(analyzer, save, config, json),
        Commands::Export { dot, render, image } => {
            handle_export(analyzer, config, dot, render, image)
        }
    }
}
