//! Error types for the rules engine and its configuration.

use thiserror::Error;

/// Errors returned by board and rules operations.
///
/// All of these are local and recoverable: an operation that fails leaves
/// the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoError {
    #[error("coordinate ({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("point ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },

    #[error("invalid stone color: {0:?}")]
    InvalidColor(String),

    #[error("unknown scoring rule: {0:?}")]
    UnknownRule(String),

    #[error("board size must be at least 1, got {0}")]
    InvalidBoardSize(usize),
}

/// Errors raised while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] GoError),

    #[error("could not determine config directory")]
    NoConfigDir,
}
