// Error types for the board engine and the decision core

use thiserror::Error;

use crate::types::{Cell, Direction, Player};

/// Why a move could not be applied to a board
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),

    #[error("{player} cannot step {}", .direction.as_str())]
    IllegalStep { player: Player, direction: Direction },

    #[error("cell {cell} cannot be removed after {player} steps {}", .direction.as_str())]
    IllegalRemoval {
        player: Player,
        direction: Direction,
        cell: Cell,
    },

    #[error("invalid board setup: {0}")]
    InvalidSetup(String),
}

/// Failures of the turn-selection core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("{0} has no legal move")]
    NoLegalMove(Player),

    #[error("no cell can be removed after {player} steps {}", .direction.as_str())]
    NoRemovalTarget { player: Player, direction: Direction },

    #[error(transparent)]
    Board(#[from] MoveError),
}
