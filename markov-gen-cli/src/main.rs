//! Command-line interface for the character-level Markov text generator.
//!
//! Trains a model on a corpus file and prints generated text.

use std::path::PathBuf;

use clap::Parser;
use markov_gen_core::{MarkovModel, io};

#[derive(Parser)]
#[command(name = "markov-gen")]
#[command(about = "Character-level Markov text generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Context window length in characters
    window_length: usize,

    /// Text used to seed generation
    initial_text: String,

    /// Total length of the generated text, in characters
    target_length: usize,

    /// Path to the training corpus
    corpus: PathBuf,

    /// Fixed RNG seed for reproducible output; omit for entropy seeding
    #[arg(long)]
    seed: Option<u64>,

    /// Dump the trained window map to stderr before generating
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut model = match cli.seed {
        Some(seed) => MarkovModel::with_seed(cli.window_length, seed)?,
        None => MarkovModel::new(cli.window_length)?,
    };

    let corpus = io::read_corpus(&cli.corpus)?;
    model.train(corpus.chars())?;

    if cli.dump {
        eprint!("{}", model);
    }

    println!("{}", model.generate(&cli.initial_text, cli.target_length));
    Ok(())
}
