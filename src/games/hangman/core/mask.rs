use std::fmt;

use super::{Letter, Phrase};

/// One position of a [`Mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A letter that hasn't been guessed yet.
    Placeholder,
    /// A space between words.
    Separator,
    /// Punctuation, digits and other characters that can't be guessed.
    Literal(char),
    Revealed(Letter),
}

impl Cell {
    pub const PLACEHOLDER: char = '-';

    fn from_char(ch: char) -> Self {
        if ch == Phrase::SEPARATOR {
            Self::Separator
        } else if Letter::new(ch).is_some() {
            Self::Placeholder
        } else {
            Self::Literal(ch)
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Self::Placeholder
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Placeholder => Self::PLACEHOLDER,
            Self::Separator => Phrase::SEPARATOR,
            Self::Literal(ch) => ch,
            Self::Revealed(letter) => letter.as_char(),
        }
    }
}

/// The partially revealed form of a [`Phrase`].
///
/// Always the same length as the phrase it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Vec<Cell>,
}

impl Mask {
    /// Hides every letter of `phrase`.
    pub fn new(phrase: &Phrase) -> Self {
        Self {
            cells: phrase.chars().map(Cell::from_char).collect(),
        }
    }

    /// Reveals every occurrence of `letter`, leaving the rest alone.
    #[must_use]
    pub fn reveal(&self, phrase: &Phrase, letter: Letter) -> Self {
        debug_assert_eq!(self.len(), phrase.len());

        let cells = self
            .cells
            .iter()
            .zip(phrase.chars())
            .map(|(cell, ch)| {
                if letter.matches(ch) {
                    Cell::Revealed(letter)
                } else {
                    *cell
                }
            })
            .collect();

        Self { cells }
    }

    #[must_use]
    pub fn reveal_all(&self, phrase: &Phrase) -> Self {
        let cells = self
            .cells
            .iter()
            .zip(phrase.chars())
            .map(|(cell, ch)| Letter::new(ch).map_or(*cell, Cell::Revealed))
            .collect();

        Self { cells }
    }

    pub fn is_solved(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_hidden())
    }

    pub fn hidden(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn to_display(&self) -> String {
        self.cells.iter().map(|cell| cell.as_char()).collect()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display())
    }
}

impl PartialEq<&str> for Mask {
    fn eq(&self, other: &&str) -> bool {
        &self.to_display() == other
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Mask};
    use crate::games::hangman::core::{Letter, Phrase};
    use pretty_assertions::assert_eq;

    fn phrase(s: &str) -> Phrase {
        Phrase::parse(s).unwrap()
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn hides_letters_keeps_spaces() {
        let phrase = phrase("new york");
        let mask = Mask::new(&phrase);

        assert_eq!(mask.len(), phrase.len());
        assert_eq!(mask, "--- ----");
        assert_eq!(mask.cells()[3], Cell::Separator);
        assert_eq!(mask.hidden(), 7);
    }

    #[test]
    fn literals_always_visible() {
        let mask = Mask::new(&phrase("ocean's 11"));
        assert_eq!(mask, "-----'- 11");
    }

    #[test]
    fn reveals_every_occurrence() {
        let phrase = phrase("banana");
        let mask = Mask::new(&phrase).reveal(&phrase, letter('a'));
        assert_eq!(mask, "-A-A-A");

        let mask = mask.reveal(&phrase, letter('N'));
        assert_eq!(mask, "-ANANA");
        assert!(!mask.is_solved());
    }

    #[test]
    fn reveal_is_idempotent() {
        let phrase = phrase("Cat");
        let once = Mask::new(&phrase).reveal(&phrase, letter('c'));
        let twice = once.reveal(&phrase, letter('c'));
        assert_eq!(once, twice);
        assert_eq!(twice, "C--");
    }

    #[test]
    fn absent_letter_changes_nothing() {
        let phrase = phrase("cat");
        let mask = Mask::new(&phrase);
        assert_eq!(mask.reveal(&phrase, letter('z')), mask);
    }

    #[test]
    fn solved_once_all_letters_shown() {
        let phrase = phrase("to be");
        let mut mask = Mask::new(&phrase);

        for ch in ['t', 'o', 'b'] {
            mask = mask.reveal(&phrase, letter(ch));
            assert!(!mask.is_solved());
        }

        mask = mask.reveal(&phrase, letter('e'));
        assert!(mask.is_solved());
        assert_eq!(mask, "TO BE");
    }

    #[test]
    fn reveal_all_solves() {
        let phrase = phrase("new york!");
        let mask = Mask::new(&phrase).reveal_all(&phrase);
        assert!(mask.is_solved());
        assert_eq!(mask, "NEW YORK!");
    }
}
