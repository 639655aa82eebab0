//! Connected groups and their liberties.

use crate::board::Board;
use crate::error::GoError;
use std::collections::HashSet;

/// A set of `(x, y)` coordinates.
pub type Group = HashSet<(usize, usize)>;

/// Get all stones in the same group as the stone at `(x0, y0)`.
///
/// Walks orthogonally through stones of the seed's color with an explicit
/// stack, so group size is not limited by recursion depth. Returns an empty
/// set if the seed point is empty.
pub fn connected_group(board: &Board, x0: usize, y0: usize) -> Result<Group, GoError> {
    let mut group = HashSet::new();
    let Some(stone) = board.get(x0, y0)? else {
        return Ok(group);
    };

    let mut stack = vec![(x0, y0)];
    while let Some((x, y)) = stack.pop() {
        if group.contains(&(x, y)) {
            continue;
        }
        if board.cell(x, y) == Some(stone) {
            group.insert((x, y));
            stack.extend(
                board
                    .neighbors(x, y)
                    .filter(|point| !group.contains(point)),
            );
        }
    }
    Ok(group)
}

/// True if any stone of `group` touches an empty point.
pub fn has_liberty(board: &Board, group: &Group) -> bool {
    group.iter().any(|&(x, y)| {
        board
            .neighbors(x, y)
            .any(|(nx, ny)| board.cell(nx, ny).is_none())
    })
}

/// Count liberties (distinct empty adjacent points) of a group.
pub fn count_liberties(board: &Board, group: &Group) -> usize {
    let mut liberties = HashSet::new();
    for &(x, y) in group {
        for (nx, ny) in board.neighbors(x, y) {
            if board.cell(nx, ny).is_none() {
                liberties.insert((nx, ny));
            }
        }
    }
    liberties.len()
}

/// Liberties of the group containing the stone at `(x, y)`.
pub fn liberties_at(board: &Board, x: usize, y: usize) -> Result<usize, GoError> {
    let group = connected_group(board, x, y)?;
    Ok(count_liberties(board, &group))
}
