use tracing::{debug, instrument};

use super::{
    game::{GameState, GuessOutcome, Status},
    Error, Terminal,
};

type Result<T> = std::result::Result<T, Error>;

const GUESS_PROMPT: &str = "Guess a letter, or the whole answer: ";

/// Plays a single round to the end.
///
/// Each loop iteration handles exactly one line of input, and the board is
/// redrawn only after a guess has been applied.
pub struct RoundController<'t, T> {
    terminal: &'t mut T,
}

impl<'t, T: Terminal> RoundController<'t, T> {
    pub fn new(terminal: &'t mut T) -> Self {
        Self { terminal }
    }

    #[instrument(skip_all, fields(category = %game.category()))]
    pub fn play(&mut self, game: &mut GameState) -> Result<Status> {
        self.render(game)?;

        while !game.is_over() {
            let input = self.terminal.prompt(GUESS_PROMPT)?;

            match game.guess(&input) {
                Ok(outcome) => {
                    self.announce(outcome)?;
                    self.render(game)?;
                }
                Err(invalid) => {
                    debug!(%invalid, "guess refused");
                    self.terminal.say(format!("{invalid}, try again.\n"))?;
                }
            }
        }

        self.finish(game)?;
        Ok(game.status())
    }

    fn render(&mut self, game: &GameState) -> Result<()> {
        let mut lines = vec![
            format!("Category: {}", game.category()),
            format!("Lives: {}", game.lives()),
            String::new(),
            format!("    {}", game.mask()),
            String::new(),
        ];

        if !game.is_over() {
            lines.push(format!("Letters left: {}", game.alphabet()));
            lines.push(String::new());
        }

        self.terminal.display(&lines)
    }

    fn announce(&mut self, outcome: GuessOutcome) -> Result<()> {
        let line = match outcome {
            GuessOutcome::Correct(letter) => format!("Yes! {letter} is in the answer.\n"),
            GuessOutcome::Incorrect(letter) => {
                format!("Sorry, {letter} isn't in the answer. You lose a life.\n")
            }
            GuessOutcome::WrongPhrase => "Sorry, that's not the answer. You lose a life.\n".to_owned(),
            GuessOutcome::Won | GuessOutcome::Lost => return Ok(()),
        };

        self.terminal.say(line)
    }

    fn finish(&mut self, game: &GameState) -> Result<()> {
        let answer = game.phrase().rendered();

        let line = match game.status() {
            Status::Won => format!("Well done, you guessed it! The answer was {answer}."),
            Status::Lost => format!("You're out of lives! The answer was {answer}."),
            Status::InProgress => return Ok(()),
        };

        self.terminal.say(line)
    }
}
