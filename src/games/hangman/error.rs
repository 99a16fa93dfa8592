use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't read words file `{}`: {source}", .path.display())]
    ReadWords {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("couldn't parse words file: {0}")]
    ParseWords(#[from] toml::de::Error),
    #[error("no categories to choose from")]
    NoCategories,
    #[error("there's no category called `{0}`")]
    UnknownCategory(String),
    #[error("category `{0}` has no words to choose from")]
    EmptyWordPool(String),
    #[error("input was closed before the round finished")]
    InputClosed,
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
