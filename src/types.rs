// Isola Game Types
// Players, compass directions, grid cells and the per-turn action

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two pawns on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Returns the other player
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Index into per-player arrays
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Single-character board marker
    pub fn marker(self) -> char {
        match self {
            Player::First => '1',
            Player::Second => '2',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}

/// 2D coordinate on the board, row 0 is the top edge
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Cell one step away in `dir`, or None if that leaves a `rows` x `cols` grid
    pub fn step(self, dir: Direction, rows: usize, cols: usize) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some(Cell { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight directions a pawn can step in
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions in move-enumeration order.
    /// Search tie-breaks keep the earliest entry, so this order is load-bearing.
    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }

    /// Order in which cells around the opponent are tried for removal
    pub fn removal_priority() -> [Direction; 8] {
        [
            Direction::North,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::East,
            Direction::West,
            Direction::South,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }

    /// Short name used in logs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::NorthEast => "ne",
            Direction::NorthWest => "nw",
            Direction::SouthEast => "se",
            Direction::SouthWest => "sw",
        }
    }

    /// Parses the short name produced by `as_str`
    pub fn parse(s: &str) -> Option<Direction> {
        let name = s.trim().to_lowercase();
        Direction::all().into_iter().find(|dir| dir.as_str() == name)
    }

    /// (row, col) offset of a single step
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}

/// Occupancy of a single board cell
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Empty,
    Removed,
    Occupied(Player),
}

/// A complete turn: step the pawn, then remove one cell
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub direction: Direction,
    pub remove: Cell,
}

impl Action {
    pub fn new(direction: Direction, remove: Cell) -> Self {
        Action { direction, remove }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} remove {}", self.direction.as_str(), self.remove)
    }
}
