//! Game configuration
//!
//! Defaults come from [`crate::types`]; a JSON file can override any subset of
//! fields, and the runner applies CLI flags on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::BoardError;
use crate::minos::Catalog;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MOVE_PERIOD_MS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("move period must be greater than 0 ms")]
    ZeroMovePeriod,
    #[error("board must be at least {min_width}x{min_height} to fit every piece (got {width}x{height})")]
    BoardTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    /// Gravity interval, also the lock grace window
    pub move_period_ms: u32,
    pub seed: u32,
    pub start_paused: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            move_period_ms: MOVE_PERIOD_MS,
            seed: 1,
            start_paused: false,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check the config can host every piece of `catalog`
    ///
    /// Every shape must fit in any rotation, with at least one free row
    /// below a freshly spawned piece.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        if self.move_period_ms == 0 {
            return Err(ConfigError::ZeroMovePeriod);
        }
        if self.board_width == 0 || self.board_height == 0 {
            return Err(BoardError::ZeroDimension {
                width: self.board_width,
                height: self.board_height,
            }
            .into());
        }

        let min_width = catalog.max_extent();
        let min_height = catalog.max_extent() + 1;
        if self.board_width < min_width || self.board_height < min_height {
            return Err(ConfigError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }
}
