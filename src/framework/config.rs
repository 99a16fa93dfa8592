use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::games::hangman::Difficulty;

pub const DEFAULT_CONFIG_FILE: &str = "./hangman.toml";
const CONFIG_FILE_VAR: &str = "HANGMAN_CONFIG_FILE";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(skip)]
    source: Source,
}

/// Where the config file came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// Passed with `--config`.
    Given(PathBuf),
    /// Named by `HANGMAN_CONFIG_FILE`.
    FromEnv(PathBuf),
    /// Found at the default location.
    Default(PathBuf),
    /// No file at the default location.
    #[default]
    Missing,
}

impl Config {
    /// Layers the config file (if any) and `HANGMAN_*` environment variables
    /// over the defaults.
    ///
    /// A file passed in explicitly or through `HANGMAN_CONFIG_FILE` has to
    /// exist; the default `./hangman.toml` is optional.
    ///
    /// Loading happens before logging is set up, so nothing is logged here.
    /// Call [`Config::report`] once tracing is running.
    pub fn load(file: Option<&Path>) -> Result<Self, Error> {
        Self::load_from(
            file,
            std::env::var(CONFIG_FILE_VAR).ok(),
            Path::new(DEFAULT_CONFIG_FILE),
            None,
        )
    }

    /// `env` replaces the process environment when given.
    fn load_from(
        file: Option<&Path>,
        file_from_env: Option<String>,
        default_file: &Path,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, Error> {
        let source = if let Some(file) = file {
            Source::Given(file.to_owned())
        } else if let Some(path) = file_from_env {
            Source::FromEnv(PathBuf::from(path))
        } else if default_file.exists() {
            Source::Default(default_file.to_owned())
        } else {
            Source::Missing
        };

        let mut builder = ::config::Config::builder();

        builder = match &source {
            Source::Given(path) | Source::FromEnv(path) => builder.add_source(
                ::config::File::new(&path.to_string_lossy(), ::config::FileFormat::Toml)
                    .required(true),
            ),
            Source::Default(path) => builder.add_source(
                ::config::File::new(&path.to_string_lossy(), ::config::FileFormat::Toml)
                    .required(false),
            ),
            Source::Missing => builder,
        };

        let config: Self = builder
            .add_source(
                ::config::Environment::with_prefix("HANGMAN")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        Ok(Self { source, ..config })
    }

    /// Logs where the config came from.
    #[instrument(skip_all)]
    pub fn report(&self) {
        match &self.source {
            Source::Given(path) => info!(path = %path.display(), "config file from --config"),
            Source::FromEnv(path) => {
                info!(path = %path.display(), "config file from {CONFIG_FILE_VAR}")
            }
            Source::Default(path) => info!(path = %path.display(), "config file"),
            Source::Missing => {
                warn!(path = DEFAULT_CONFIG_FILE, "no config file, using defaults")
            }
        }

        debug!(config = ?self, "config loaded");
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct WordsConfig {
    #[serde(default = "WordsConfig::default_path")]
    path: PathBuf,
}

impl WordsConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("./words.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LogsConfig {
    filter: Option<String>,
}

impl LogsConfig {
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct GameConfig {
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
}

impl GameConfig {
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem reading config: {0}")]
    Read(::config::ConfigError),

    #[error("problem parsing config: {0}")]
    Parse(::config::ConfigError),
}
