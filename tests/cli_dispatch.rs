// tests/cli_dispatch.rs - Exit codes and side effects of the command surface
use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wordgraph_core::cli::{dispatch, Cli};
use wordgraph_core::exit::WordGraphExit;

const SAMPLE: &str = "The scientist carefully analyzed data. The scientist then shared results.";

fn corpus(text: &str) -> Result<(TempDir, PathBuf)> {
    let d = tempfile::tempdir()?;
    let path = d.path().join("corpus.txt");
    fs::write(&path, text)?;
    Ok((d, path))
}

fn run(file: &Path, args: &[&str]) -> Result<WordGraphExit> {
    let file = file.to_string_lossy().to_string();
    let mut argv = vec!["wordgraph", "--file", file.as_str(), "--seed", "3"];
    argv.extend_from_slice(args);
    dispatch::execute(Cli::try_parse_from(argv)?)
}

#[test]
fn test_queries_succeed() -> Result<()> {
    let (_d, file) = corpus(SAMPLE)?;
    assert_eq!(run(&file, &["show"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["bridge", "the", "carefully"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["generate", "the", "carefully"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["path", "the", "shared"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["path", "the"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["rank", "scientist"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["--json", "rank", "--all", "--uniform"])?, WordGraphExit::Success);
    Ok(())
}

#[test]
fn test_not_found_is_still_success() -> Result<()> {
    let (_d, file) = corpus(SAMPLE)?;
    assert_eq!(run(&file, &["bridge", "nope", "data"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["path", "results", "the"])?, WordGraphExit::Success);
    assert_eq!(run(&file, &["rank", "nope"])?, WordGraphExit::Success);
    Ok(())
}

#[test]
fn test_empty_corpus_is_invalid_input() -> Result<()> {
    let (_d, file) = corpus("... 123 !!!")?;
    assert_eq!(run(&file, &["show"])?, WordGraphExit::InvalidInput);
    Ok(())
}

#[test]
fn test_unreadable_corpus_is_error() {
    let result = run(Path::new("/no/such/corpus.txt"), &["show"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_config_is_invalid_input() -> Result<()> {
    let (d, file) = corpus(SAMPLE)?;
    let config = d.path().join("bad.toml");
    fs::write(&config, "[rank]\nmax_iterations = 0")?;
    let config = config.to_string_lossy().to_string();
    assert_eq!(
        run(&file, &["--config", config.as_str(), "show"])?,
        WordGraphExit::InvalidInput
    );
    Ok(())
}

#[test]
fn test_walk_save_writes_file() -> Result<()> {
    let (d, file) = corpus(SAMPLE)?;
    let out = d.path().join("walk.txt");
    let out_arg = out.to_string_lossy().to_string();
    assert_eq!(run(&file, &["walk", "--save", out_arg.as_str()])?, WordGraphExit::Success);

    let saved = fs::read_to_string(&out)?;
    assert!(!saved.is_empty());
    assert!(saved.split(' ').all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    Ok(())
}

#[test]
fn test_export_and_path_export() -> Result<()> {
    let (d, file) = corpus(SAMPLE)?;
    let dot = d.path().join("graph.dot");
    let dot_arg = dot.to_string_lossy().to_string();
    assert_eq!(run(&file, &["export", "--dot", dot_arg.as_str()])?, WordGraphExit::Success);
    assert!(fs::read_to_string(&dot)?.contains("\"the\" -> \"scientist\""));

    let path_dot = d.path().join("p.dot");
    let path_arg = path_dot.to_string_lossy().to_string();
    let exit = run(&file, &["path", "the", "shared", "--export", "-o", path_arg.as_str()])?;
    assert_eq!(exit, WordGraphExit::Success);
    assert!(fs::read_to_string(&path_dot)?.contains("fillcolor=gold"));
    Ok(())
}

#[test]
fn test_rank_requires_word_or_all() {
    let parsed = Cli::try_parse_from(["wordgraph", "--file", "x.txt", "rank"]);
    assert!(parsed.is_err());
}

#[test]
fn test_path_export_requires_target() {
    let single_source = Cli::try_parse_from(["wordgraph", "--file", "x.txt", "path", "the", "--export"]);
    assert!(single_source.is_err());

    let pair = Cli::try_parse_from(["wordgraph", "--file", "x.txt", "path", "the", "shared", "--export"]);
    assert!(pair.is_ok());
}
