//! Game settings: an optional TOML file overridden by command-line flags.

use std::path::{Path, PathBuf};

use chess_core::Color;
use minimax_engine::SearchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid argument: {0}")]
    Argument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(s: Side) -> Color {
        match s {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl std::str::FromStr for Side {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            other => Err(ConfigError::Argument(format!("unknown color '{other}'"))),
        }
    }
}

/// Settings for one console game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Color the human plays
    pub human_color: Side,
    /// AI settings, read from top-level `depth` and `order_moves` keys
    #[serde(flatten)]
    pub search: SearchConfig,
    /// Starting position; the standard one when unset
    pub start_fen: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_color: Side::White,
            search: SearchConfig::default(),
            start_fen: None,
        }
    }
}

impl PlayConfig {
    pub fn human(&self) -> Color {
        self.human_color.into()
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Applies `--depth`, `--color` and `--fen`. `--config` is handled by
    /// the caller before this runs.
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), ConfigError> {
        let mut i = 0;
        while i < args.len() {
            let value = |i: usize| {
                args.get(i + 1)
                    .ok_or_else(|| ConfigError::Argument(format!("{} needs a value", args[i])))
            };
            match args[i].as_str() {
                "--depth" | "-d" => {
                    let v = value(i)?;
                    self.search.depth = v
                        .parse()
                        .map_err(|_| ConfigError::Argument(format!("bad depth '{v}'")))?;
                    i += 1;
                }
                "--color" | "-c" => {
                    self.human_color = value(i)?.parse()?;
                    i += 1;
                }
                "--fen" => {
                    self.start_fen = Some(value(i)?.clone());
                    i += 1;
                }
                "--config" => i += 1,
                other => return Err(ConfigError::Argument(format!("unknown flag '{other}'"))),
            }
            i += 1;
        }
        Ok(())
    }
}

/// Finds the value of `--config` in the raw arguments.
pub fn config_path(args: &[String]) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}
