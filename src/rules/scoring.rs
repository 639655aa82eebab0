//! Scoring under area (Chinese) or territory (Japanese) counting.

use super::territory::classify_territory;
use crate::board::types::point_count;
use crate::board::{Board, Stone};
use crate::error::GoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which counting convention to score with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRule {
    /// Territory plus stones on the board
    #[default]
    Chinese,
    /// Territory plus prisoners taken
    Japanese,
}

impl ScoringRule {
    pub const ALL: [ScoringRule; 2] = [ScoringRule::Chinese, ScoringRule::Japanese];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Chinese => "chinese",
            Self::Japanese => "japanese",
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringRule {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chinese" => Ok(Self::Chinese),
            "japanese" => Ok(Self::Japanese),
            _ => Err(GoError::UnknownRule(s.to_string())),
        }
    }
}

/// Cumulative stones each color has taken from the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captures {
    /// White stones removed by Black
    pub by_black: u32,
    /// Black stones removed by White
    pub by_white: u32,
}

impl Captures {
    pub fn by(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.by_black,
            Stone::White => self.by_white,
        }
    }

    pub fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.by_black = self.by_black.saturating_add(count),
            Stone::White => self.by_white = self.by_white.saturating_add(count),
        }
    }
}

/// Final or preview score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Color with more points, `None` on a tie.
    pub fn winner(&self) -> Option<Stone> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "black {} - white {}", self.black, self.white)
    }
}

/// Score the position. Reads the board and counters only.
pub fn score(board: &Board, captures: &Captures, rule: ScoringRule) -> Score {
    let territory = classify_territory(board);
    let points = |stone: Stone| {
        let bonus = match rule {
            ScoringRule::Chinese => point_count(board.stone_count(stone)),
            ScoringRule::Japanese => captures.by(stone),
        };
        territory.of(stone).saturating_add(bonus)
    };
    Score {
        black: points(Stone::Black),
        white: points(Stone::White),
    }
}
