use std::path::PathBuf;

use crate::games::hangman::Difficulty;

/// Guess the hidden phrase before you run out of lives.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of `./hangman.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the difficulty menu.
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Seed for picking words, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
}
