//! Game session: the board plus turn order, prisoners and scoring rule.
//!
//! The rules functions are stateless; this is the aggregate a caller owns
//! per game. One session must be driven by one thread at a time (every
//! mutating call takes `&mut self`); separate sessions share nothing.

use crate::board::{Board, Stone};
use crate::config::EngineConfig;
use crate::error::GoError;
use crate::rules::{apply_move, score, Captures, Score, ScoringRule};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A move that was accepted, as reported to other layers (e.g. a remote peer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number
    pub move_number: u32,
    pub x: usize,
    pub y: usize,
    pub color: Stone,
    /// Stones captured by this move
    pub captures: u32,
}

/// Main game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub board: Board,
    /// Color to move next
    pub to_move: Stone,
    /// Prisoners taken so far by each color. Only `play` credits them.
    captures: Captures,
    /// Rule used by `preview_score` and `settle`
    pub rule: ScoringRule,
    /// Number of moves played so far
    pub move_number: u32,
}

impl GameSession {
    pub fn new(config: &EngineConfig) -> Result<Self, GoError> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        info!(size = config.board_size, rule = %config.rule, "new game");
        Ok(Self {
            board,
            to_move: Stone::Black, // Black plays first in Go
            captures: Captures::default(),
            rule: config.rule,
            move_number: 0,
        })
    }

    /// Prisoners taken so far by each color.
    pub fn captures(&self) -> Captures {
        self.captures
    }

    /// Play the side to move at `(x, y)`.
    ///
    /// On success the prisoners are credited to the mover and the turn
    /// passes to the opponent. On error nothing changes.
    pub fn play(&mut self, x: usize, y: usize) -> Result<MoveRecord, GoError> {
        let color = self.to_move;
        let result = apply_move(&mut self.board, x, y, color)?;

        self.captures.add(color, result.count());
        self.move_number += 1;
        self.to_move = color.opponent();

        debug!(
            move_number = self.move_number,
            x,
            y,
            %color,
            captures = result.count(),
            "move played"
        );

        Ok(MoveRecord {
            move_number: self.move_number,
            x,
            y,
            color,
            captures: result.count(),
        })
    }

    pub fn set_rule(&mut self, rule: ScoringRule) {
        self.rule = rule;
    }

    /// Score the current position without ending the game.
    pub fn preview_score(&self) -> Score {
        score(&self.board, &self.captures, self.rule)
    }

    /// End the game and return the final score.
    pub fn settle(self) -> Score {
        let final_score = self.preview_score();
        info!(
            rule = %self.rule,
            moves = self.move_number,
            black = final_score.black,
            white = final_score.white,
            "game settled"
        );
        final_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: usize) -> GameSession {
        GameSession::new(&EngineConfig::small(size)).unwrap()
    }

    #[test]
    fn test_new_session() {
        let game = GameSession::new(&EngineConfig::default()).unwrap();
        assert_eq!(game.board.size(), 19);
        assert_eq!(game.to_move, Stone::Black);
        assert_eq!(game.captures(), Captures::default());
        assert_eq!(game.move_number, 0);
    }

    #[test]
    fn test_new_session_rejects_zero_size() {
        assert_eq!(
            GameSession::new(&EngineConfig::small(0)),
            Err(GoError::InvalidBoardSize(0))
        );
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = session(9);
        let first = game.play(2, 2).unwrap();
        assert_eq!(first.color, Stone::Black);
        assert_eq!(first.move_number, 1);
        let second = game.play(6, 6).unwrap();
        assert_eq!(second.color, Stone::White);
        assert_eq!(second.move_number, 2);
        assert_eq!(game.to_move, Stone::Black);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = session(9);
        game.play(4, 4).unwrap();
        let before = game.clone();
        assert_eq!(game.play(4, 4), Err(GoError::CellOccupied { x: 4, y: 4 }));
        assert!(game.play(9, 4).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_captures_credited_to_mover() {
        let mut game = session(5);
        // B (0,1), W (1,1), B (1,0), W (4,4), B (2,1), W (4,3), B (1,2) takes
        for (x, y) in [(0, 1), (1, 1), (1, 0), (4, 4), (2, 1), (4, 3)] {
            game.play(x, y).unwrap();
        }
        let record = game.play(1, 2).unwrap();
        assert_eq!(record.captures, 1);
        assert_eq!(game.captures().by_black, 1);
        assert_eq!(game.captures().by_white, 0);
        assert_eq!(game.board.get(1, 1), Ok(None));
    }

    #[test]
    fn test_direct_board_edits_do_not_credit_prisoners() {
        let mut game = session(5);
        game.play(0, 0).unwrap();
        game.board.clear(0, 0).unwrap();
        assert_eq!(game.captures(), Captures::default());

        // A rejected move leaves the counters alone too.
        game.play(2, 2).unwrap();
        assert!(game.play(2, 2).is_err());
        assert_eq!(game.captures(), Captures::default());
    }

    #[test]
    fn test_move_record_json() {
        let mut game = session(9);
        let record = game.play(3, 4).unwrap();
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "move_number": 1,
                "x": 3,
                "y": 4,
                "color": "black",
                "captures": 0
            })
        );
    }

    #[test]
    fn test_preview_then_settle() {
        let mut game = session(3);
        game.play(1, 0).unwrap();
        game.play(1, 2).unwrap();
        let preview = game.preview_score();
        assert_eq!(preview, game.preview_score());

        game.set_rule(ScoringRule::Japanese);
        let japanese = game.preview_score();
        assert_eq!(japanese, Score { black: 0, white: 0 });
        assert_eq!(game.settle(), japanese);
    }
}
