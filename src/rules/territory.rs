//! Territory: empty regions and who surrounds them.

use crate::board::types::point_count;
use crate::board::{Board, Stone};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A maximal connected area of empty points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub cells: Vec<(usize, usize)>,
    /// The only color bordering the region, `None` if it touches both or neither
    pub owner: Option<Stone>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Points of territory held by each color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub black: u32,
    pub white: u32,
}

impl Territory {
    pub fn of(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }
}

/// Partition every empty point into regions and classify each one.
///
/// One visited set is shared across the whole scan, so each empty point is
/// filled exactly once. Regions come out in row-major order of their first
/// point.
pub fn classify_regions(board: &Board) -> Vec<Region> {
    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    let mut regions = Vec::new();

    for (x, y) in board.points() {
        if board.cell(x, y).is_some() || visited.contains(&(x, y)) {
            continue;
        }

        let mut cells = Vec::new();
        let mut borders: HashSet<Stone> = HashSet::new();
        let mut stack = vec![(x, y)];
        visited.insert((x, y));

        while let Some((cx, cy)) = stack.pop() {
            cells.push((cx, cy));
            for (nx, ny) in board.neighbors(cx, cy) {
                match board.cell(nx, ny) {
                    Some(stone) => {
                        borders.insert(stone);
                    }
                    None => {
                        if visited.insert((nx, ny)) {
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }

        let owner = if borders.len() == 1 {
            borders.into_iter().next()
        } else {
            None
        };
        regions.push(Region { cells, owner });
    }

    regions
}

/// Total territory per color. Neutral regions count for nobody.
pub fn classify_territory(board: &Board) -> Territory {
    classify_regions(board)
        .iter()
        .fold(Territory::default(), |mut acc, region| {
            match region.owner {
                Some(Stone::Black) => acc.black += point_count(region.len()),
                Some(Stone::White) => acc.white += point_count(region.len()),
                None => {}
            }
            acc
        })
}
