// Board engine for Isola
//
// The decision core only talks to a board through the `IsolaBoard` trait.
// `Board` is the grid implementation used by the match driver, the replay
// tool and the tests.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MoveError;
use crate::types::{Cell, CellState, Direction, Player};

const EMPTY_MARKER: char = '.';
const REMOVED_MARKER: char = '#';

/// Operations the decision core needs from a board
pub trait IsolaBoard: Clone {
    fn max_rows(&self) -> usize;

    fn max_cols(&self) -> usize;

    /// State of `cell`. Off-board cells report `Removed`.
    fn cell_state(&self, cell: Cell) -> CellState;

    /// Current cell of `player`'s pawn
    fn position(&self, player: Player) -> Cell;

    /// Cell reached by stepping once in `direction`, None if off the board
    fn new_location(&self, player: Player, direction: Direction) -> Option<Cell>;

    /// True if `player` may step once in `direction`
    fn legal_move(&self, player: Player, direction: Direction) -> bool;

    /// True if `player` may step in `direction` and then remove `remove`.
    /// The cell the pawn leaves counts as free for the removal.
    fn legal_move_removing(&self, player: Player, direction: Direction, remove: Cell) -> bool;

    /// Applies a full turn: pawn step followed by a cell removal
    fn apply_move(
        &mut self,
        player: Player,
        direction: Direction,
        remove: Cell,
    ) -> Result<(), MoveError>;

    /// Number of cells that are neither removed nor occupied
    fn free_cells(&self) -> usize {
        let mut count = 0;
        for row in 0..self.max_rows() {
            for col in 0..self.max_cols() {
                if self.cell_state(Cell::new(row, col)) == CellState::Empty {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Rectangular Isola board with two pawns
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(into = "BoardSnapshot", try_from = "BoardSnapshot")]
pub struct Board {
    rows: usize,
    cols: usize,
    removed: Vec<bool>,
    pawns: [Cell; 2],
    free: usize,
}

impl Board {
    /// Creates an empty board with First at the top middle and Second at the bottom middle
    pub fn new(rows: usize, cols: usize) -> Result<Self, MoveError> {
        let first = Cell::new(0, cols / 2);
        let second = Cell::new(rows.saturating_sub(1), cols / 2);
        Self::with_positions(rows, cols, first, second)
    }

    /// Creates an empty board with both pawns at the given cells
    pub fn with_positions(
        rows: usize,
        cols: usize,
        first: Cell,
        second: Cell,
    ) -> Result<Self, MoveError> {
        if rows == 0 || cols == 0 {
            return Err(MoveError::InvalidSetup(format!(
                "board must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        for pawn in [first, second] {
            if pawn.row >= rows || pawn.col >= cols {
                return Err(MoveError::OutOfBounds(pawn));
            }
        }
        if first == second {
            return Err(MoveError::InvalidSetup(format!(
                "both pawns start on {}",
                first
            )));
        }

        Ok(Board {
            rows,
            cols,
            removed: vec![false; rows * cols],
            pawns: [first, second],
            free: rows * cols - 2,
        })
    }

    /// Parses a board drawn as text, one string per row.
    /// `.` is empty, `#` removed, `1` and `2` the pawns.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, MoveError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.as_ref().chars().count()).unwrap_or(0);

        let mut removed = Vec::with_capacity(rows * cols);
        let mut pawns: [Option<Cell>; 2] = [None, None];

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                return Err(MoveError::InvalidSetup(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                match ch {
                    EMPTY_MARKER => removed.push(false),
                    REMOVED_MARKER => removed.push(true),
                    '1' | '2' => {
                        let player = if ch == '1' { Player::First } else { Player::Second };
                        if pawns[player.index()].replace(cell).is_some() {
                            return Err(MoveError::InvalidSetup(format!(
                                "{} pawn appears more than once",
                                player
                            )));
                        }
                        removed.push(false);
                    }
                    other => {
                        return Err(MoveError::InvalidSetup(format!(
                            "unknown marker '{}' at {}",
                            other, cell
                        )))
                    }
                }
            }
        }

        let (first, second) = match pawns {
            [Some(first), Some(second)] => (first, second),
            _ => {
                return Err(MoveError::InvalidSetup(
                    "both pawns must be on the board".to_string(),
                ))
            }
        };

        let mut board = Self::with_positions(rows, cols, first, second)?;
        board.free -= removed.iter().filter(|&&r| r).count();
        board.removed = removed;
        Ok(board)
    }

    /// Removes a cell without moving a pawn, for setting up positions
    pub fn remove(&mut self, cell: Cell) -> Result<(), MoveError> {
        if !self.in_bounds(cell) {
            return Err(MoveError::OutOfBounds(cell));
        }
        if !self.is_free(cell) {
            return Err(MoveError::InvalidSetup(format!(
                "cell {} is not free",
                cell
            )));
        }
        let idx = self.index(cell);
        self.removed[idx] = true;
        self.free -= 1;
        Ok(())
    }

    /// Text rendering, one string per row
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| match self.cell_state(Cell::new(row, col)) {
                        CellState::Empty => EMPTY_MARKER,
                        CellState::Removed => REMOVED_MARKER,
                        CellState::Occupied(player) => player.marker(),
                    })
                    .collect()
            })
            .collect()
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    fn is_free(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.removed[self.index(cell)] && !self.pawns.contains(&cell)
    }
}

impl IsolaBoard for Board {
    fn max_rows(&self) -> usize {
        self.rows
    }

    fn max_cols(&self) -> usize {
        self.cols
    }

    fn cell_state(&self, cell: Cell) -> CellState {
        if !self.in_bounds(cell) || self.removed[self.index(cell)] {
            CellState::Removed
        } else if cell == self.pawns[0] {
            CellState::Occupied(Player::First)
        } else if cell == self.pawns[1] {
            CellState::Occupied(Player::Second)
        } else {
            CellState::Empty
        }
    }

    fn position(&self, player: Player) -> Cell {
        self.pawns[player.index()]
    }

    fn new_location(&self, player: Player, direction: Direction) -> Option<Cell> {
        self.position(player).step(direction, self.rows, self.cols)
    }

    fn legal_move(&self, player: Player, direction: Direction) -> bool {
        self.new_location(player, direction)
            .is_some_and(|dest| self.is_free(dest))
    }

    fn legal_move_removing(&self, player: Player, direction: Direction, remove: Cell) -> bool {
        let dest = match self.new_location(player, direction) {
            Some(dest) if self.is_free(dest) => dest,
            _ => return false,
        };

        self.in_bounds(remove)
            && !self.removed[self.index(remove)]
            && remove != dest
            && remove != self.position(player.opponent())
    }

    fn apply_move(
        &mut self,
        player: Player,
        direction: Direction,
        remove: Cell,
    ) -> Result<(), MoveError> {
        if !self.legal_move(player, direction) {
            return Err(MoveError::IllegalStep { player, direction });
        }
        if !self.in_bounds(remove) {
            return Err(MoveError::OutOfBounds(remove));
        }
        if !self.legal_move_removing(player, direction, remove) {
            return Err(MoveError::IllegalRemoval {
                player,
                direction,
                cell: remove,
            });
        }

        if let Some(dest) = self.new_location(player, direction) {
            self.pawns[player.index()] = dest;
        }
        let idx = self.index(remove);
        self.removed[idx] = true;
        self.free -= 1;
        Ok(())
    }

    fn free_cells(&self) -> usize {
        self.free
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_rows() {
            let spaced: Vec<String> = line.chars().map(|c| c.to_string()).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

/// Serialized form of a board: its text rows
#[derive(Serialize, Deserialize)]
struct BoardSnapshot {
    rows: Vec<String>,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        BoardSnapshot {
            rows: board.to_rows(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = MoveError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        Board::from_rows(snapshot.rows.as_slice())
    }
}
