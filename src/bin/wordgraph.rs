use std::io::Write;

use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;
use wordgraph_core::cli::{self, Cli};
use wordgraph_core::exit::WordGraphExit;

fn main() -> WordGraphExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red());
            WordGraphExit::Error
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
