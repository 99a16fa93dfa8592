#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod cli;
use cli::Cli;

mod errors;
use errors::Error;

mod framework;

mod games;
use games::hangman::{self, Console, Session, Status, WordsList};

use clap::Parser;

#[allow(unused_imports)]
use tracing::{debug, error, info, trace};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = framework::Config::load(cli.config.as_deref()).map_err(Error::from)?;
    framework::logging::init_tracing(config.logs.filter());

    info!(version = env!("CARGO_PKG_VERSION"), "starting hangman");
    config.report();

    let seed = cli.seed.or(config.game.seed());
    let words = WordsList::load(config.words.path(), seed).map_err(Error::from)?;

    let difficulty = cli.difficulty.or(config.game.difficulty());
    let mut session = Session::new(words, Console::stdio()).with_difficulty(difficulty);

    match session.run() {
        Ok(results) => {
            let won = results.iter().filter(|status| **status == Status::Won).count();
            info!(played = results.len(), won, "finished");
            Ok(())
        }
        Err(hangman::Error::InputClosed) => {
            info!("input closed, exiting");
            Ok(())
        }
        Err(err) => {
            error!(%err, "game stopped");
            Err(Error::from(err).into())
        }
    }
}
