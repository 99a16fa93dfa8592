use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Letter;

/// The hidden answer for a round.
///
/// Runs of whitespace are collapsed into single spaces, which become the
/// separators of the mask. Anything else that isn't an ASCII letter is kept
/// as a literal and is never guessable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phrase {
    chars: Vec<char>,
}

impl Phrase {
    pub const SEPARATOR: char = ' ';

    pub fn parse(s: &str) -> Result<Self, ParsePhraseError> {
        let normalized = s.split_whitespace().collect::<Vec<&str>>().join(" ");

        if normalized.is_empty() {
            return Err(ParsePhraseError::Empty);
        }

        if !normalized.chars().any(|ch| Letter::new(ch).is_some()) {
            return Err(ParsePhraseError::NoLetters(normalized));
        }

        Ok(Self {
            chars: normalized.chars().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.chars().any(|ch| letter.matches(ch))
    }

    /// Human-readable form: every word capitalised, the rest lowercase.
    pub fn rendered(&self) -> String {
        self.to_string()
            .split(Self::SEPARATOR)
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePhraseError {
    #[error("phrase is empty")]
    Empty,
    #[error("phrase `{0}` has no letters to guess")]
    NoLetters(String),
}

impl FromStr for Phrase {
    type Err = ParsePhraseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Phrase {
    type Error = ParsePhraseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phrase> for String {
    fn from(value: Phrase) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chars.iter().collect::<String>())
    }
}
