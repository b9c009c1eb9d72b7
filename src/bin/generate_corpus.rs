//! CLI tool for generating training examples from the domain vocabulary
//!
//! Usage:
//!   cargo run --bin generate_corpus                          # 500 examples
//!   cargo run --bin generate_corpus -- --count 100 --dedupe  # unique only
//!   cargo run --bin generate_corpus -- --seed 42             # reproducible
//!
//! Appends to the target file and always exits successfully on a completed
//! run; a shortfall versus the requested count is reported, not an error.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

use schema_advisor::{load_corpus, save_corpus, Synthesizer, VocabularyStore};

#[derive(Parser)]
#[command(name = "generate_corpus")]
#[command(about = "Generate and append training examples to a corpus file")]
struct Args {
    /// Path to the corpus JSON file
    #[arg(short = 'f', long, default_value = "tables_train.json")]
    file: PathBuf,

    /// How many examples to generate
    #[arg(short = 'c', long, default_value = "500")]
    count: usize,

    /// Skip examples whose fingerprint already exists in the corpus or
    /// earlier in this run
    #[arg(long)]
    dedupe: bool,

    /// Seed for a reproducible run; random otherwise
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let store = VocabularyStore::builtin()?;
    let mut corpus = load_corpus(&args.file)?;

    let mut seen = HashSet::new();
    if args.dedupe {
        for example in &corpus {
            seen.insert(example.fingerprint()?);
        }
    }

    let mut synthesizer = match args.seed {
        Some(seed) => Synthesizer::with_seed(&store, seed),
        None => Synthesizer::new(&store),
    };
    let report = synthesizer.generate_batch(
        args.count,
        if args.dedupe { Some(&mut seen) } else { None },
    )?;

    let added = report.examples.len();
    let shortfall = report.shortfall();
    let attempts = report.attempts;
    corpus.extend(report.examples);
    save_corpus(&args.file, &corpus)?;

    println!(
        "Added {} examples. Total now: {}. File: {}",
        added,
        corpus.len(),
        args.file.display()
    );
    if shortfall > 0 {
        println!(
            "Shortfall: {} fewer than requested after {} attempts",
            shortfall, attempts
        );
    }
    Ok(())
}
