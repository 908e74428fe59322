use serde::{self, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PROMPT: &str = ">>> ";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("toml parsing error: {0}")]
    TomlParsingError(#[from] toml::de::Error),
}

pub fn read_config<P: Into<PathBuf>>(config_path: P) -> Result<Config, ConfigError> {
    let config_path = config_path.into();
    let config = {
        let contents = fs::read_to_string(&config_path)?;
        deserialize_config(&contents)?
    };

    Ok(config)
}

pub fn deserialize_config(contents: &str) -> Result<Config, ConfigError> {
    let config = toml::from_str(contents)?;
    Ok(config)
}

/// Location of the config file when none is given on the command
/// line: `<config dir>/dicecalc/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dicecalc").join("config.toml"))
}

/// The "repl" section of the config file, for the interactive loop.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct ReplConfig {
    /// Text written before each line is read.
    prompt: Option<String>,

    /// Report a failed expression and keep reading instead of ending
    /// the session.
    continue_on_error: Option<bool>,
}

/// The "dice" section of the config file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct DiceConfig {
    /// Upper bound on the number of dice in a single roll. Unlimited
    /// when unset.
    max_dice: Option<u64>,

    /// Fixed RNG seed. Rolls come from entropy when unset.
    seed: Option<u64>,
}

/// Represents the toml config file for the calculator. Every section is
/// optional; the accessor methods fill in defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    repl: Option<ReplConfig>,
    dice: Option<DiceConfig>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.repl
            .as_ref()
            .and_then(|repl| repl.prompt.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
    }

    /// Whether a fault should end the session (the default) or just
    /// be reported.
    #[inline]
    #[must_use]
    pub fn continue_on_error(&self) -> bool {
        self.repl
            .as_ref()
            .and_then(|repl| repl.continue_on_error)
            .unwrap_or(false)
    }

    /// Maximum dice allowed in one roll, if a limit is configured.
    #[inline]
    #[must_use]
    pub fn max_dice(&self) -> Option<u64> {
        self.dice.as_ref().and_then(|dice| dice.max_dice)
    }

    #[inline]
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.dice.as_ref().and_then(|dice| dice.seed)
    }
}
