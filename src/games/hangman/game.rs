use std::{fmt, ops::Not};

use tracing::{debug, info, instrument};

use super::core::{
    guess::{evaluate_letter, evaluate_phrase},
    Alphabet, Guess, InvalidGuess, Letter, Mask, Phrase,
};

/// Display label for a round's category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_finished(self) -> bool {
        self != Self::InProgress
    }
}

/// What an accepted guess did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct(Letter),
    Incorrect(Letter),
    WrongPhrase,
    Won,
    Lost,
}

/// Everything belonging to one round of hangman.
///
/// Guesses move the round from [`Status::InProgress`] to [`Status::Won`] or
/// [`Status::Lost`]. Both are final: later guesses are refused with
/// [`InvalidGuess::RoundOver`] and nothing changes until [`GameState::reset`].
#[derive(Debug, Clone)]
pub struct GameState {
    category: Category,
    phrase: Phrase,
    mask: Mask,
    alphabet: Alphabet,
    lives: u8,
    status: Status,
}

impl GameState {
    pub fn new(category: impl Into<Category>, phrase: Phrase, lives: u8) -> Self {
        let mask = Mask::new(&phrase);
        let status = if lives == 0 {
            Status::Lost
        } else {
            Status::InProgress
        };

        Self {
            category: category.into(),
            phrase,
            mask,
            alphabet: Alphabet::new(),
            lives,
            status,
        }
    }

    /// Throws away the current round and starts a fresh one.
    pub fn reset(&mut self, category: impl Into<Category>, phrase: Phrase, lives: u8) {
        *self = Self::new(category, phrase, lives);
    }

    /// Classifies raw input and applies it.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, InvalidGuess> {
        if self.is_over() {
            return Err(InvalidGuess::RoundOver);
        }

        let guess = Guess::parse(input)?;
        self.apply(guess)
    }

    #[instrument(skip(self), fields(lives = self.lives))]
    pub fn apply(&mut self, guess: Guess) -> Result<GuessOutcome, InvalidGuess> {
        if self.is_over() {
            return Err(InvalidGuess::RoundOver);
        }

        let outcome = match guess {
            Guess::Phrase(candidate) => self.guess_phrase(&candidate),
            Guess::Letter(letter) => self.guess_letter(letter)?,
        };

        debug!(?outcome, mask = %self.mask, hidden = self.mask.hidden(), lives = self.lives);
        Ok(outcome)
    }

    fn guess_phrase(&mut self, candidate: &str) -> GuessOutcome {
        if evaluate_phrase(candidate, &self.phrase) {
            self.mask = self.mask.reveal_all(&self.phrase);
            self.win()
        } else {
            self.lose_life().unwrap_or(GuessOutcome::WrongPhrase)
        }
    }

    fn guess_letter(&mut self, letter: Letter) -> Result<GuessOutcome, InvalidGuess> {
        if self.alphabet.contains(letter).not() {
            return Err(InvalidGuess::AlreadyGuessed(letter));
        }

        self.alphabet.remove(letter);

        if evaluate_letter(letter, &self.phrase) {
            self.mask = self.mask.reveal(&self.phrase, letter);

            if self.mask.is_solved() {
                Ok(self.win())
            } else {
                Ok(GuessOutcome::Correct(letter))
            }
        } else {
            Ok(self.lose_life().unwrap_or(GuessOutcome::Incorrect(letter)))
        }
    }

    fn win(&mut self) -> GuessOutcome {
        info!(answer = %self.phrase, "round won");
        self.status = Status::Won;
        GuessOutcome::Won
    }

    /// Returns `Some` if that was the last life.
    fn lose_life(&mut self) -> Option<GuessOutcome> {
        self.lives = self.lives.saturating_sub(1);

        (self.lives == 0).then(|| {
            info!(answer = %self.phrase, "round lost");
            self.status = Status::Lost;
            GuessOutcome::Lost
        })
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, GuessOutcome, Status};
    use crate::games::hangman::core::{InvalidGuess, Letter, Phrase};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn round(answer: &str, lives: u8) -> GameState {
        GameState::new("Test", Phrase::parse(answer).unwrap(), lives)
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn cat_scenario() {
        let mut game = round("CAT", 5);
        assert_eq!(*game.mask(), "---");

        assert_eq!(game.guess("c"), Ok(GuessOutcome::Correct(letter('c'))));
        assert_eq!(*game.mask(), "C--");
        assert_eq!(game.lives(), 5);
        assert!(!game.alphabet().contains(letter('c')));

        assert_eq!(game.guess("z"), Ok(GuessOutcome::Incorrect(letter('z'))));
        assert_eq!(*game.mask(), "C--");
        assert_eq!(game.lives(), 4);

        assert_eq!(game.guess("a"), Ok(GuessOutcome::Correct(letter('a'))));
        assert_eq!(game.guess("t"), Ok(GuessOutcome::Won));
        assert_eq!(*game.mask(), "CAT");
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn phrase_guess_wins_without_letters() {
        let mut game = round("NEW YORK", 5);
        assert_eq!(*game.mask(), "--- ----");
        assert_eq!(game.phrase().rendered(), "New York");

        assert_eq!(game.guess("new york"), Ok(GuessOutcome::Won));
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.alphabet().len(), 26);
        assert!(game.mask().is_solved());
        assert_eq!(game.lives(), 5);
    }

    #[test]
    fn wrong_phrase_costs_a_life_only() {
        let mut game = round("new york", 5);

        assert_eq!(game.guess("new jersey"), Ok(GuessOutcome::WrongPhrase));
        assert_eq!(game.lives(), 4);
        assert_eq!(game.alphabet().len(), 26);
        assert_eq!(*game.mask(), "--- ----");
        assert_eq!(game.status(), Status::InProgress);
    }

    #[test]
    #[traced_test]
    fn last_life_loses() {
        let mut game = round("cat", 1);

        assert_eq!(game.guess("q"), Ok(GuessOutcome::Lost));
        assert_eq!(game.lives(), 0);
        assert_eq!(game.status(), Status::Lost);
        assert!(logs_contain("round lost"));

        let before = game.clone();
        assert_eq!(game.guess("c"), Err(InvalidGuess::RoundOver));
        assert_eq!(game.guess("cat and dog"), Err(InvalidGuess::RoundOver));
        assert_eq!(game.mask(), before.mask());
        assert_eq!(game.alphabet(), before.alphabet());
        assert_eq!(game.lives(), before.lives());
    }

    #[test]
    fn wrong_phrase_on_last_life_loses() {
        let mut game = round("cat", 1);
        assert_eq!(game.guess("dogs"), Ok(GuessOutcome::Lost));
        assert_eq!(game.status(), Status::Lost);
    }

    #[test]
    fn won_round_refuses_guesses() {
        let mut game = round("ox", 5);
        game.guess("o").unwrap();
        assert_eq!(game.guess("x"), Ok(GuessOutcome::Won));

        assert_eq!(game.guess("a"), Err(InvalidGuess::RoundOver));
        assert_eq!(game.alphabet().len(), 24);
    }

    #[test]
    fn validation_failures_change_nothing() {
        let mut game = round("cat", 5);
        game.guess("c").unwrap();
        game.guess("z").unwrap();

        let before = game.clone();

        assert_eq!(game.guess("c"), Err(InvalidGuess::AlreadyGuessed(letter('c'))));
        assert_eq!(game.guess("Z"), Err(InvalidGuess::AlreadyGuessed(letter('z'))));
        assert_eq!(game.guess("7"), Err(InvalidGuess::NotALetter('7')));
        assert_eq!(game.guess("ab"), Err(InvalidGuess::WrongLength("ab".to_owned())));
        assert_eq!(game.guess(""), Err(InvalidGuess::Empty));

        assert_eq!(game.lives(), before.lives());
        assert_eq!(game.alphabet(), before.alphabet());
        assert_eq!(game.mask(), before.mask());
        assert_eq!(game.status(), Status::InProgress);
    }

    #[test]
    fn alphabet_shrinks_once_per_letter() {
        let mut game = round("hello world", 7);

        for (count, ch) in ['h', 'q', 'l', 'x'].into_iter().enumerate() {
            game.guess(&ch.to_string()).unwrap();
            assert_eq!(game.alphabet().len(), 26 - (count + 1));
        }

        game.guess("goodbye world").unwrap();
        assert_eq!(game.alphabet().len(), 22);
    }

    #[test]
    fn lives_drop_by_one_per_miss() {
        let mut game = round("moon", 6);

        for (misses, input) in ["a", "b", "c", "moan"].into_iter().enumerate() {
            game.guess(input).unwrap();
            assert_eq!(game.lives(), 6 - (misses as u8 + 1));
        }

        game.guess("m").unwrap();
        assert_eq!(game.lives(), 2);
    }

    #[test]
    fn punctuation_never_blocks_a_win() {
        let mut game = round("ocean's 11", 5);
        assert_eq!(*game.mask(), "-----'- 11");

        for ch in ['o', 'c', 'e', 'a', 'n'] {
            game.guess(&ch.to_string()).unwrap();
        }

        assert_eq!(game.guess("s"), Ok(GuessOutcome::Won));
        assert_eq!(*game.mask(), "OCEAN'S 11");
    }

    #[test]
    fn reset_starts_fresh() {
        let mut game = round("cat", 1);
        game.guess("q").unwrap();
        assert!(game.is_over());

        game.reset("Cities", Phrase::parse("paris").unwrap(), 7);

        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.lives(), 7);
        assert_eq!(game.alphabet().len(), 26);
        assert_eq!(*game.mask(), "-----");
        assert_eq!(game.category().as_str(), "Cities");
    }

    #[test]
    fn no_lives_starts_lost() {
        let game = round("cat", 0);
        assert_eq!(game.status(), Status::Lost);
    }
}
