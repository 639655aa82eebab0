//! Engine configuration.
//!
//! Stored as JSON in the platform config directory; any missing field falls
//! back to its default, so `{}` is a valid file.

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::{ConfigError, GoError};
use crate::rules::ScoringRule;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Settings for a new game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board edge length (must be at least 1)
    pub board_size: usize,

    /// Counting convention used when scoring
    pub rule: ScoringRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            rule: ScoringRule::default(),
        }
    }
}

impl EngineConfig {
    /// Quick config for a small board
    pub fn small(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if self.board_size == 0 {
            return Err(GoError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }

    /// `<config dir>/goban/config.json` for the current platform.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let project_dirs =
            ProjectDirs::from("", "", "goban").ok_or(ConfigError::NoConfigDir)?;
        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`EngineConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
