//! Goban - Go board rules engine
//!
//! Stone placement with capture resolution, territory classification and
//! area/territory scoring on an N x N board.

pub mod board;
pub mod config;
pub mod error;
pub mod playout;
pub mod rules;
pub mod session;

pub use board::{Board, Cell, Stone, DEFAULT_BOARD_SIZE};
pub use config::EngineConfig;
pub use error::{ConfigError, GoError};
pub use rules::{
    apply_move, classify_regions, classify_territory, connected_group, count_liberties,
    has_liberty, liberties_at, score, CaptureResult, Captures, Group, Region, Score,
    ScoringRule, Territory,
};
pub use session::{GameSession, MoveRecord};
