use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use super::{Letter, Phrase};

/// Inputs longer than this are phrase guesses.
pub const MAX_LETTER_GUESS_LEN: usize = 3;

/// A classified player input.
///
/// Any guess longer than 3 characters is interpreted as a full-phrase
/// attempt. A single character is a letter guess. Anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(Letter),
    Phrase(String),
}

impl Guess {
    pub fn parse(input: &str) -> Result<Self, InvalidGuess> {
        let input = input.trim();
        let len = input.chars().count();
        trace!(input, len);

        match len {
            0 => Err(InvalidGuess::Empty),
            1 => {
                let ch = input.chars().next().ok_or(InvalidGuess::Empty)?;
                Letter::new(ch)
                    .map(Self::Letter)
                    .ok_or(InvalidGuess::NotALetter(ch))
            }
            2..=MAX_LETTER_GUESS_LEN => Err(InvalidGuess::WrongLength(input.to_owned())),
            _ => Ok(Self::Phrase(input.to_owned())),
        }
    }
}

impl FromStr for Guess {
    type Err = InvalidGuess;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A guess that was refused without affecting the round.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidGuess {
    #[error("please enter a letter, or guess the whole answer")]
    Empty,
    #[error("`{0}` is not a letter")]
    NotALetter(char),
    #[error("`{0}` is too long for a letter and too short for the answer")]
    WrongLength(String),
    #[error("you've already guessed {0}")]
    AlreadyGuessed(Letter),
    #[error("this round is already over")]
    RoundOver,
}

pub fn evaluate_letter(letter: Letter, phrase: &Phrase) -> bool {
    phrase.contains(letter)
}

/// Compares a phrase guess against the rendered answer, ignoring case and
/// extra whitespace.
pub fn evaluate_phrase(candidate: &str, phrase: &Phrase) -> bool {
    normalize(candidate) == normalize(&phrase.rendered())
}

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}
