// Library exports for the Isola agent
// The match driver and the replay tool both build on these modules

pub mod agent;
pub mod board;
pub mod config;
pub mod debug_logger;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod movegen;
pub mod removal;
pub mod replay;
pub mod search;
pub mod types;

pub use agent::{Agent, MinimaxAgent, RandomAgent};
pub use board::{Board, IsolaBoard};
pub use error::{AgentError, MoveError};
pub use types::{Action, Cell, CellState, Direction, Player};
