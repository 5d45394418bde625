//! Anagram Finder - CLI
//!
//! Loads a dictionary (or its cached index) and prints the anagrams of each query word.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use anagram_finder::{
    commands::{DEFAULT_CACHE_FILE, LookupConfig, lookup_anagrams, open_index},
    output::write_lookup_result,
};

#[derive(Parser)]
#[command(
    name = "anagram_finder",
    about = "Find all words in a dictionary that are anagrams of the given words",
    version,
    author
)]
struct Cli {
    /// Dictionary file with one word per line
    dictionary: Option<PathBuf>,

    /// Words to find anagrams for (options must come before the dictionary)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    queries: Vec<String>,

    /// Index cache file (read if present, rewritten after a rebuild)
    #[arg(short, long, default_value = DEFAULT_CACHE_FILE)]
    cache: PathBuf,

    /// Ignore any existing cache and re-read the dictionary
    #[arg(short, long)]
    rebuild: bool,

    /// Do not write the cache after reading the dictionary
    #[arg(long)]
    no_cache: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    run(cli, &mut io::stdout().lock())
}

/// Execute one invocation, writing results to `out`
///
/// An `Err` makes the process exit with status 1.
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    // No dictionary given: show usage and exit successfully
    let Some(dictionary) = cli.dictionary else {
        writeln!(out, "{}", Cli::command().render_help())?;
        return Ok(());
    };

    let config = LookupConfig::new(dictionary)
        .with_cache_path(cli.cache)
        .with_rebuild(cli.rebuild)
        .with_no_cache(cli.no_cache);

    let opened = open_index(&config)
        .context("There was an error reading the dictionary file. Stopping.")?;

    for query in &cli.queries {
        write_lookup_result(out, &lookup_anagrams(&opened.index, query))?;
    }

    Ok(())
}
