use tracing::{debug, info, instrument, warn};

use super::{
    game::{GameState, Status},
    options::{CategoryChoice, Difficulty},
    Error, RoundController, Terminal, WordProvider,
};

type Result<T> = std::result::Result<T, Error>;

/// Menus around the rounds: difficulty, category and "play again?".
pub struct Session<P, T> {
    words: P,
    terminal: T,
    difficulty: Option<Difficulty>,
}

impl<P: WordProvider, T: Terminal> Session<P, T> {
    pub fn new(words: P, terminal: T) -> Self {
        Self {
            words,
            terminal,
            difficulty: None,
        }
    }

    /// Skips the difficulty menu.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[cfg(test)]
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Plays rounds until the player stops, returning each round's result.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> Result<Vec<Status>> {
        let difficulty = match self.difficulty {
            Some(difficulty) => {
                self.terminal.say(format!(
                    "Playing on {difficulty} difficulty with {} lives.\n",
                    difficulty.lives()
                ))?;
                difficulty
            }
            None => self.select_difficulty()?,
        };

        let mut game: Option<GameState> = None;
        let mut results = Vec::new();

        loop {
            let choice = self.select_category()?;
            let category = match choice {
                CategoryChoice::Named(name) => name,
                CategoryChoice::Random => {
                    let name = self.words.random_category()?;
                    self.terminal
                        .say(format!("The random category selected for you is {name}.\n"))?;
                    name
                }
            };

            let phrase = self.words.random_word(&category)?;
            let lives = difficulty.lives();

            let round = match game.take() {
                Some(mut round) => {
                    round.reset(category, phrase, lives);
                    round
                }
                None => GameState::new(category, phrase, lives),
            };
            let round = game.insert(round);

            let status = RoundController::new(&mut self.terminal).play(round)?;
            info!(?status, "round finished");
            results.push(status);

            if !self.play_again()? {
                break;
            }
        }

        Ok(results)
    }

    fn select_difficulty(&mut self) -> Result<Difficulty> {
        let mut lines = vec!["Please select your game difficulty.".to_owned(), String::new()];
        lines.extend(Difficulty::ALL.iter().enumerate().map(|(index, difficulty)| {
            format!("{} - {difficulty} ({} Lives)", index + 1, difficulty.lives())
        }));
        lines.push(String::new());
        self.terminal.display(&lines)?;

        let difficulty = loop {
            let input = self
                .terminal
                .prompt("Which difficulty would you like to select? ")?;

            match input.trim().parse().ok().and_then(Difficulty::from_menu) {
                Some(difficulty) => break difficulty,
                None => {
                    warn!(%input, "invalid difficulty");
                    self.terminal.say(format!(
                        "Please enter a number from 1 to {}.",
                        Difficulty::ALL.len()
                    ))?;
                }
            }
        };

        debug!(%difficulty);
        self.terminal.say(format!(
            "\nYou have selected game difficulty {difficulty} and will have {} lives.\n",
            difficulty.lives()
        ))?;

        Ok(difficulty)
    }

    fn select_category(&mut self) -> Result<CategoryChoice> {
        let categories = self
            .words
            .list_categories()
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<String>>();

        if categories.is_empty() {
            return Err(Error::NoCategories);
        }

        let mut lines = vec![
            "Please select one of the following categories, or choose 'Random' if you would like us to pick one for you.".to_owned(),
            String::new(),
        ];
        lines.extend(
            categories
                .iter()
                .enumerate()
                .map(|(index, name)| format!("{} - {name}", index + 1)),
        );
        lines.push(format!("{} - Random", categories.len() + 1));
        lines.push(String::new());
        self.terminal.display(&lines)?;

        loop {
            let input = self
                .terminal
                .prompt("Which category number would you like to select? ")?;

            match input.trim().parse::<usize>() {
                Ok(number) if (1..=categories.len()).contains(&number) => {
                    let name = categories[number - 1].clone();
                    self.terminal.say(format!(
                        "\nYou chose to guess something related to {name}.\n"
                    ))?;
                    return Ok(CategoryChoice::Named(name));
                }
                Ok(number) if number > categories.len() => return Ok(CategoryChoice::Random),
                _ => {
                    warn!(%input, "invalid category");
                    self.terminal.say(format!(
                        "Please enter a number from 1 to {}.",
                        categories.len() + 1
                    ))?;
                }
            }
        }
    }

    fn play_again(&mut self) -> Result<bool> {
        let input = self.terminal.prompt("\nWould you like to play again? (y/n) ")?;
        let again = matches!(input.trim().to_lowercase().as_str(), "y" | "yes");

        if !again {
            self.terminal.say("Thanks for playing!")?;
        }

        Ok(again)
    }
}
