use std::fmt;

use serde::Deserialize;

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Hard,
    Medium,
    Easy,
}

impl Difficulty {
    /// In menu order.
    pub const ALL: [Self; 3] = [Self::Hard, Self::Medium, Self::Easy];

    pub const fn lives(self) -> u8 {
        match self {
            Self::Hard => 5,
            Self::Medium => 6,
            Self::Easy => 7,
        }
    }

    /// Looks up a 1-based menu number.
    pub fn from_menu(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hard => "Hard",
            Self::Medium => "Medium",
            Self::Easy => "Easy",
        };

        write!(f, "{name}")
    }
}

/// Which category the next round draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    Named(String),
    Random,
}
