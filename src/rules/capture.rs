//! Move application and capture resolution.

use super::group::{connected_group, has_liberty};
use crate::board::types::point_count;
use crate::board::{Board, Stone};
use crate::error::GoError;
use std::collections::HashSet;
use tracing::debug;

/// Stones removed by a single move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureResult {
    /// Coordinates of every removed stone, sorted by `(y, x)`
    pub removed: Vec<(usize, usize)>,
}

impl CaptureResult {
    /// Number of opponent stones captured.
    pub fn count(&self) -> u32 {
        point_count(self.removed.len())
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Place `stone` at `(x, y)` and remove any opponent groups left without
/// liberties.
///
/// The point is validated before anything is written, so an error means the
/// board is untouched. Turn order and capture totals belong to the caller.
/// A move that leaves the mover's own group without liberties is accepted
/// and the stone stays on the board.
pub fn apply_move(
    board: &mut Board,
    x: usize,
    y: usize,
    stone: Stone,
) -> Result<CaptureResult, GoError> {
    board.place(x, y, stone)?;

    let opponent = stone.opponent();
    let mut examined: HashSet<(usize, usize)> = HashSet::new();
    let mut removed = Vec::new();

    let neighbors: Vec<(usize, usize)> = board.neighbors(x, y).collect();
    for (nx, ny) in neighbors {
        // Also skips stones taken earlier in this move, which are now empty.
        if board.cell(nx, ny) != Some(opponent) || examined.contains(&(nx, ny)) {
            continue;
        }
        let group = connected_group(board, nx, ny)?;
        examined.extend(group.iter().copied());
        if has_liberty(board, &group) {
            continue;
        }
        for &(gx, gy) in &group {
            board.clear(gx, gy)?;
        }
        debug!(
            x = nx,
            y = ny,
            stones = group.len(),
            captured = %opponent,
            "group captured"
        );
        removed.extend(group);
    }

    removed.sort_by_key(|&(rx, ry)| (ry, rx));
    Ok(CaptureResult { removed })
}
