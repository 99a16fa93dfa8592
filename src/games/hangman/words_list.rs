use std::{fs, path::Path};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Deserialize;
use tracing::{debug, info, instrument, trace};

use super::{core::Phrase, Error};

type Result<T> = std::result::Result<T, Error>;

/// Where round answers come from.
pub trait WordProvider {
    /// Category names, in a stable order.
    fn list_categories(&self) -> Vec<&str>;

    fn random_word(&mut self, category: &str) -> Result<Phrase>;

    fn random_category(&mut self) -> Result<String>;
}

#[derive(Debug, Clone, Deserialize)]
struct CategoryWords {
    name: String,
    #[serde(default)]
    words: Vec<Phrase>,
}

#[derive(Debug, Deserialize)]
struct WordsFile {
    #[serde(rename = "category", default)]
    categories: Vec<CategoryWords>,
}

/// Categories and their phrases, read from a TOML file:
///
/// ```toml
/// [[category]]
/// name = "Animals"
/// words = ["elephant", "polar bear"]
/// ```
#[derive(Debug, Clone)]
pub struct WordsList {
    categories: Vec<CategoryWords>,
    rng: StdRng,
}

impl WordsList {
    #[instrument(skip(seed))]
    pub fn load(path: &Path, seed: Option<u64>) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadWords {
            path: path.to_owned(),
            source,
        })?;

        let list = Self::parse(&text, seed)?;
        info!(categories = list.categories.len(), "loaded words");

        Ok(list)
    }

    pub fn parse(text: &str, seed: Option<u64>) -> Result<Self> {
        let file: WordsFile = toml::from_str(text)?;

        if file.categories.is_empty() {
            return Err(Error::NoCategories);
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            categories: file.categories,
            rng,
        })
    }
}

impl WordProvider for WordsList {
    fn list_categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }

    fn random_word(&mut self, name: &str) -> Result<Phrase> {
        let words = &self
            .categories
            .iter()
            .find(|category| category.name == name)
            .ok_or_else(|| Error::UnknownCategory(name.to_owned()))?
            .words;

        let word = words
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| Error::EmptyWordPool(name.to_owned()))?;

        trace!(category = name, %word);
        Ok(word)
    }

    fn random_category(&mut self) -> Result<String> {
        let category = self
            .categories
            .choose(&mut self.rng)
            .map(|category| category.name.clone())
            .ok_or(Error::NoCategories)?;

        debug!(%category);
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::{WordProvider, WordsList};
    use crate::games::hangman::Error;
    use pretty_assertions::assert_eq;

    const WORDS: &str = r#"
        [[category]]
        name = "Animals"
        words = ["cat", "polar bear", "elephant"]

        [[category]]
        name = "Cities"
        words = ["new york", "paris"]

        [[category]]
        name = "Empty"
    "#;

    #[test]
    fn categories_keep_file_order() {
        let list = WordsList::parse(WORDS, Some(1)).unwrap();
        assert_eq!(list.list_categories(), vec!["Animals", "Cities", "Empty"]);
    }

    #[test]
    fn random_word_from_category() {
        let mut list = WordsList::parse(WORDS, None).unwrap();
        let words = ["cat", "polar bear", "elephant"];

        for _ in 0..20 {
            let word = list.random_word("Animals").unwrap();
            assert!(words.contains(&word.to_string().as_str()))
        }
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let mut first = WordsList::parse(WORDS, Some(42)).unwrap();
        let mut second = WordsList::parse(WORDS, Some(42)).unwrap();

        for _ in 0..10 {
            assert_eq!(
                first.random_word("Cities").unwrap(),
                second.random_word("Cities").unwrap()
            );
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut list = WordsList::parse(WORDS, None).unwrap();
        let err = list.random_word("Empty").unwrap_err();
        assert!(matches!(err, Error::EmptyWordPool(name) if name == "Empty"));
    }

    #[test]
    fn unknown_category_is_an_error() {
        let mut list = WordsList::parse(WORDS, None).unwrap();
        let err = list.random_word("Films").unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(name) if name == "Films"));
    }

    #[test]
    fn random_category_is_listed() {
        let mut list = WordsList::parse(WORDS, None).unwrap();
        let category = list.random_category().unwrap();
        assert!(list.list_categories().contains(&category.as_str()));
    }

    #[test]
    fn no_categories_is_an_error() {
        let err = WordsList::parse("", None).unwrap_err();
        assert!(matches!(err, Error::NoCategories));
    }

    #[test]
    fn letterless_word_fails_to_parse() {
        let text = r#"
            [[category]]
            name = "Numbers"
            words = ["42"]
        "#;

        let err = WordsList::parse(text, None).unwrap_err();
        assert!(matches!(err, Error::ParseWords(_)));
    }
}
