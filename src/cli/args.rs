use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordgraph", version, about = "Word adjacency graph analysis")]
pub struct Cli {
    /// Text file to build the graph from
    #[arg(long, short, value_name = "FILE")]
    pub file: PathBuf,
    /// Config file (defaults to ./wordgraph.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Seed for the random generator; overrides `text.seed`
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every vertex with its outgoing edges
    Show,
    /// Find words w such that word1 -> w -> word2
    Bridge { word1: String, word2: String },
    /// Insert bridge words into new text
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// All shortest paths between two words, or from one word to every other
    Path {
        source: String,
        target: Option<String>,
        /// Write a DOT file with the paths highlighted (needs a target)
        #[arg(long, requires = "target")]
        export: bool,
        /// DOT output path (default: path_<source>_to_<target>.dot)
        #[arg(long, short, value_name = "FILE", requires = "export")]
        output: Option<PathBuf>,
    },
    /// PageRank of a word, or of every word with --all
    Rank {
        #[arg(required_unless_present = "all")]
        word: Option<String>,
        #[arg(long)]
        all: bool,
        /// Seed the iteration with 1/N instead of term frequencies
        #[arg(long)]
        uniform: bool,
    },
    /// Random walk until a dead end or a repeated edge
    Walk {
        /// Save the walk (to `walk.output_path` unless a path is given)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },
    /// Write the graph as a DOT file
    Export {
        #[arg(long, value_name = "FILE")]
        dot: Option<PathBuf>,
        /// Also render an image with Graphviz
        #[arg(long)]
        render: bool,
        #[arg(long, value_name = "FILE", requires = "render")]
        image: Option<PathBuf>,
    },
}
