use std::{collections::BTreeSet, fmt};

use thiserror::Error;
use tracing::trace;

/// A single guessable letter, always stored in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Returns `None` for anything outside `A-Z` / `a-z`.
    pub fn new(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self(ch.to_ascii_uppercase()))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn matches(self, ch: char) -> bool {
        ch.to_ascii_uppercase() == self.0
    }

    pub fn all() -> impl Iterator<Item = Self> {
        ('A'..='Z').map(Self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a letter")]
pub struct NotALetter(pub char);

impl TryFrom<char> for Letter {
    type Error = NotALetter;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NotALetter(value))
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letters that can still be guessed this round.
///
/// Starts out as the full alphabet and only ever shrinks; a fresh one is
/// built for each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    remaining: BTreeSet<Letter>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self {
            remaining: Letter::all().collect(),
        }
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.remaining.contains(&letter)
    }

    /// Removing a letter that's already gone does nothing.
    pub fn remove(&mut self, letter: Letter) -> bool {
        let removed = self.remaining.remove(&letter);
        trace!(%letter, removed);
        removed
    }

    /// Remaining letters, sorted A to Z.
    pub fn remaining(&self) -> impl Iterator<Item = Letter> + '_ {
        self.remaining.iter().copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self
            .remaining()
            .map(|letter| letter.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}", letters.join(" "))
    }
}
