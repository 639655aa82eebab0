//! Board data structures.
//!
//! An N x N grid of intersections, each empty or holding one stone.
//! Coordinates are `(x, y)` with both in `[0, N)`; `y` grows downward when
//! rendered.

use crate::error::GoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conventional board size.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Number of points on a `size` x `size` board.
///
/// Fails for size 0 and for boards whose point count does not fit in a
/// `u32`, so every per-board count converts losslessly with [`point_count`].
fn board_area(size: usize) -> Result<usize, GoError> {
    size.checked_mul(size)
        .filter(|&area| area > 0 && u32::try_from(area).is_ok())
        .ok_or(GoError::InvalidBoardSize(size))
}

/// Convert a count of points on one board to `u32`.
pub(crate) fn point_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Stone color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub const ALL: [Stone; 2] = [Stone::Black, Stone::White];

    pub fn opponent(&self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stone::Black => "black",
            Stone::White => "white",
        }
    }

    fn symbol(&self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stone {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Stone::Black),
            "white" | "w" => Ok(Stone::White),
            _ => Err(GoError::InvalidColor(s.to_string())),
        }
    }
}

/// Contents of one intersection, `None` = empty.
pub type Cell = Option<Stone>;

/// Square Go board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    /// Row-major, `cells[y * size + x]`
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GoError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if board_area(raw.size)? != raw.cells.len() {
            return Err(GoError::InvalidBoardSize(raw.size));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Self, GoError> {
        let area = board_area(size)?;
        Ok(Self {
            size,
            cells: vec![None; area],
        })
    }

    /// Build a board from a text diagram, one string per row.
    ///
    /// `.` is empty, `X`/`B` black, `O`/`W` white. Whitespace inside a row
    /// is ignored so diagrams can be spaced out.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GoError> {
        let mut board = Self::new(rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != board.size {
                return Err(GoError::InvalidBoardSize(rows.len()));
            }
            for (x, symbol) in symbols.into_iter().enumerate() {
                let cell = match symbol {
                    '.' | '+' => None,
                    'X' | 'x' | 'B' | 'b' => Some(Stone::Black),
                    'O' | 'o' | 'W' | 'w' => Some(Stone::White),
                    other => return Err(GoError::InvalidColor(other.to_string())),
                };
                board.cells[y * board.size + x] = cell;
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GoError> {
        if self.in_bounds(x, y) {
            Ok(y * self.size + x)
        } else {
            Err(GoError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Contents of the intersection at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GoError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Put a stone on an empty intersection.
    pub fn place(&mut self, x: usize, y: usize, stone: Stone) -> Result<(), GoError> {
        let idx = self.index(x, y)?;
        if self.cells[idx].is_some() {
            return Err(GoError::CellOccupied { x, y });
        }
        self.cells[idx] = Some(stone);
        Ok(())
    }

    /// Like [`Board::place`] but for callers holding an untyped cell value.
    /// An empty cell is not a color and is rejected.
    pub fn place_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GoError> {
        let stone = cell.ok_or_else(|| GoError::InvalidColor("empty".to_string()))?;
        self.place(x, y, stone)
    }

    /// Empty the intersection at `(x, y)`. Used when removing captured stones.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), GoError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = None;
        Ok(())
    }

    /// In-bounds orthogonal neighbours of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size as i64;
        [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && nx < size && ny >= 0 && ny < size {
                    Some((nx as usize, ny as usize))
                } else {
                    None
                }
            })
    }

    /// Contents at a coordinate already known to be in bounds.
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.size + x]
    }

    /// All coordinates in row-major order.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    pub fn stone_count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|c| **c == Some(stone)).count()
    }

    pub fn empty_points(&self) -> Vec<(usize, usize)> {
        self.points().filter(|&(x, y)| self.cell(x, y).is_none()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row
                .iter()
                .map(|c| c.map_or('.', |s| s.symbol()))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
