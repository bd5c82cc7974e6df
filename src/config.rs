// ====== ERROR ======

use std::{error, fmt};

#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or a value did not fit its field.
    Load(::config::ConfigError),
    /// `workers` must be at least one.
    NoWorkers,
}

impl error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "[CONFIG] {e}"),
            Self::NoWorkers => write!(f, "[CONFIG] {ENV_PREFIX}_WORKERS must be at least 1"),
        }
    }
}

impl From<::config::ConfigError> for ConfigError {
    fn from(e: ::config::ConfigError) -> Self {
        Self::Load(e)
    }
}

// ====== CONFIG ======

use ::config::Environment;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use crate::notes::{AnySink, FileNoteSink, RestNoteSink};

pub const PORT: u16 = 7735;
pub const WORKERS: usize = 8;
pub const NOTES_FILE: &str = "notes.jsonl";

/// Variables are read as `TERMFOLIO_PORT`, `TERMFOLIO_WORKERS`,
/// `TERMFOLIO_NOTES_URL`, `TERMFOLIO_NOTES_KEY` and `TERMFOLIO_NOTES_FILE`.
pub const ENV_PREFIX: &str = "TERMFOLIO";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub port: u16,
    pub workers: usize,
    /// Base URL of the REST note store. Notes go to `notes_file` when unset.
    #[serde(default)]
    pub notes_url: Option<String>,
    pub notes_key: String,
    pub notes_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: PORT,
            workers: WORKERS,
            notes_url: None,
            notes_key: String::new(),
            notes_file: PathBuf::from(NOTES_FILE),
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [Config::from_env], reading `vars` instead of the process
    /// environment.
    pub fn from_vars<'a, I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let vars: HashMap<String, String> =
            vars.into_iter().map(|(k, v)| (String::from(k), String::from(v))).collect();
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let mut config: Config = ::config::Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("workers", defaults.workers as i64)?
            .set_default("notes_key", defaults.notes_key)?
            .set_default("notes_file", NOTES_FILE)?
            .add_source(env.try_parsing(true).ignore_empty(true))
            .build()?
            .try_deserialize()?;

        if config.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        config.notes_url = config.notes_url.filter(|u| !u.trim().is_empty());
        Ok(config)
    }

    /// The note sink this configuration asks for.
    pub fn sink(&self) -> AnySink {
        match &self.notes_url {
            Some(url) => AnySink::Rest(RestNoteSink::new(url, &self.notes_key)),
            None => AnySink::File(FileNoteSink::new(&self.notes_file)),
        }
    }
}
