// Turn loop driving two agents on one authoritative board

use log::{debug, info};
use serde::Serialize;

use crate::agent::Agent;
use crate::board::{Board, IsolaBoard};
use crate::debug_logger::DebugLogger;
use crate::error::{AgentError, MoveError};
use crate::movegen::legal_directions;
use crate::types::{Action, Player};

/// One applied turn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub player: Player,
    pub action: Action,
}

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub winner: Player,
    pub turns: usize,
    pub actions: Vec<TurnRecord>,
    pub final_board: Board,
}

/// A game in progress
pub struct Game {
    id: usize,
    board: Board,
    to_move: Player,
    history: Vec<TurnRecord>,
}

impl Game {
    /// Starts a game on `board` with First to move
    pub fn new(id: usize, board: Board) -> Self {
        Game {
            id,
            board,
            to_move: Player::First,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The loser is whoever has no step at the start of their turn
    pub fn winner(&self) -> Option<Player> {
        if legal_directions(&self.board, self.to_move).is_empty() {
            Some(self.to_move.opponent())
        } else {
            None
        }
    }

    /// Asks `agent` for an action, validates it and applies it
    pub fn step(&mut self, agent: &mut dyn Agent, logger: &DebugLogger) -> Result<Action, AgentError> {
        let player = self.to_move;
        if agent.player() != player {
            return Err(MoveError::InvalidSetup(format!(
                "{} is to move but {} plays {}",
                player,
                agent.name(),
                agent.player()
            ))
            .into());
        }

        let action = agent.next_action(&self.board)?;
        let before = logger.is_enabled().then(|| self.board.clone());
        self.board.apply_move(player, action.direction, action.remove)?;
        if let Some(before) = before {
            logger.log_turn(self.id, self.history.len(), agent, &before, action);
        }

        debug!(
            "game {} turn {}: {} ({}) {}\n{}",
            self.id,
            self.history.len(),
            agent.name(),
            player,
            action,
            self.board
        );

        self.history.push(TurnRecord {
            turn: self.history.len(),
            player,
            action,
        });
        self.to_move = player.opponent();
        Ok(action)
    }

    /// Plays to the end. Every turn removes a cell, so this terminates.
    pub fn play(
        mut self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
        logger: &DebugLogger,
    ) -> Result<GameRecord, AgentError> {
        let winner = loop {
            if let Some(winner) = self.winner() {
                break winner;
            }
            match self.to_move {
                Player::First => self.step(first, logger)?,
                Player::Second => self.step(second, logger)?,
            };
        };

        info!(
            "game {}: {} wins after {} turns",
            self.id,
            winner,
            self.history.len()
        );

        Ok(GameRecord {
            winner,
            turns: self.history.len(),
            actions: self.history,
            final_board: self.board,
        })
    }
}
