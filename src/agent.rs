// Isola agents
//
// `MinimaxAgent` is the tournament agent: alpha-beta search picks the step,
// then the removal selector picks the cell. `RandomAgent` is a baseline
// opponent for the match driver.

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::time::Instant;

use crate::board::{Board, IsolaBoard};
use crate::config::{Config, EvaluationConfig};
use crate::error::AgentError;
use crate::movegen::legal_directions;
use crate::removal::choose_removal;
use crate::search::search;
use crate::types::{Action, Cell, Player};

/// Name the minimax agent enters tournaments under
pub const AGENT_NAME: &str = "Agent 47";

/// Something that can take a turn
pub trait Agent {
    /// Chooses the action for this agent's player on `board`
    fn next_action(&mut self, board: &Board) -> Result<Action, AgentError>;

    /// Display name
    fn name(&self) -> &str;

    /// The pawn this agent moves
    fn player(&self) -> Player;

    /// Search depth, for agents that search
    fn search_depth(&self) -> Option<u8> {
        None
    }
}

/// A decided turn plus the search figures behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub score: f64,
    pub nodes: u64,
}

/// Minimax agent with alpha-beta pruning
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    player: Player,
    depth: u8,
    evaluation: EvaluationConfig,
}

impl MinimaxAgent {
    /// Creates an agent for `player` using the configured depth and weights
    pub fn new(player: Player, config: &Config) -> Self {
        MinimaxAgent {
            player,
            depth: config.search.depth,
            evaluation: config.evaluation.clone(),
        }
    }

    /// Overrides the search depth
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Searches for a direction, then picks the removal for it.
    /// Works on any board engine; the `Agent` impl uses it on `Board`.
    pub fn decide<B: IsolaBoard>(&self, board: &B) -> Result<Decision, AgentError> {
        let start_time = Instant::now();

        let result = search(board, self.player, self.depth, &self.evaluation)?;
        let remove = choose_removal(board, self.player, result.direction).ok_or(
            AgentError::NoRemovalTarget {
                player: self.player,
                direction: result.direction,
            },
        )?;
        let action = Action::new(result.direction, remove);

        info!(
            "{} ({}): {} (score: {}, nodes: {}, depth: {}, time: {}ms)",
            AGENT_NAME,
            self.player,
            action,
            result.score,
            result.nodes,
            self.depth,
            start_time.elapsed().as_millis()
        );

        Ok(Decision {
            action,
            score: result.score,
            nodes: result.nodes,
        })
    }
}

impl Agent for MinimaxAgent {
    fn next_action(&mut self, board: &Board) -> Result<Action, AgentError> {
        self.decide(board).map(|decision| decision.action)
    }

    fn name(&self) -> &str {
        AGENT_NAME
    }

    fn player(&self) -> Player {
        self.player
    }

    fn search_depth(&self) -> Option<u8> {
        Some(self.depth)
    }
}

/// Picks a uniformly random legal step and removal
#[derive(Debug, Clone)]
pub struct RandomAgent {
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player: Player, seed: u64) -> Self {
        RandomAgent {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn next_action(&mut self, board: &Board) -> Result<Action, AgentError> {
        let moves = legal_directions(board, self.player);
        let direction = *moves
            .choose(&mut self.rng)
            .ok_or(AgentError::NoLegalMove(self.player))?;

        let removable: Vec<Cell> = (0..board.max_rows())
            .flat_map(|row| (0..board.max_cols()).map(move |col| Cell::new(row, col)))
            .filter(|&cell| board.legal_move_removing(self.player, direction, cell))
            .collect();
        let remove = *removable
            .choose(&mut self.rng)
            .ok_or(AgentError::NoRemovalTarget {
                player: self.player,
                direction,
            })?;

        Ok(Action::new(direction, remove))
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn player(&self) -> Player {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn agent(player: Player, depth: u8) -> MinimaxAgent {
        MinimaxAgent::new(player, &Config::default_hardcoded()).with_depth(depth)
    }

    #[test]
    fn test_uses_configured_depth() {
        let agent = MinimaxAgent::new(Player::First, &Config::default_hardcoded());
        assert_eq!(agent.depth(), 6);
        assert_eq!(agent.search_depth(), Some(6));
        assert_eq!(agent.name(), "Agent 47");
        assert_eq!(RandomAgent::new(Player::Second, 0).search_depth(), None);
    }

    #[test]
    fn test_action_is_legal() {
        let board = Board::new(5, 5).unwrap();
        let mut agent = agent(Player::Second, 3);
        let action = agent.next_action(&board).unwrap();
        assert!(board.legal_move_removing(Player::Second, action.direction, action.remove));
    }

    #[test]
    fn test_removal_matches_selector_for_chosen_direction() {
        let board = Board::new(5, 5).unwrap();
        let decision = agent(Player::First, 3).decide(&board).unwrap();
        assert_eq!(
            Some(decision.action.remove),
            choose_removal(&board, Player::First, decision.action.direction)
        );
    }

    #[test]
    fn test_stuck_agent_reports_no_legal_move() {
        let board = Board::from_rows(&["2#.", "##.", "..1"]).unwrap();
        let mut agent = agent(Player::Second, 2);
        assert_eq!(
            agent.next_action(&board),
            Err(AgentError::NoLegalMove(Player::Second))
        );
    }

    #[test]
    fn test_random_agent_is_legal_and_seeded() {
        let board = Board::new(5, 5).unwrap();
        let mut a = RandomAgent::new(Player::First, 7);
        let mut b = RandomAgent::new(Player::First, 7);
        for _ in 0..10 {
            let action = a.next_action(&board).unwrap();
            assert_eq!(b.next_action(&board).unwrap(), action);
            assert!(board.legal_move_removing(Player::First, action.direction, action.remove));
        }
    }

    #[test]
    fn test_random_agent_takes_only_move() {
        let board = Board::from_rows(&["1#.", "#..", "..2"]).unwrap();
        let mut agent = RandomAgent::new(Player::First, 1);
        assert_eq!(agent.next_action(&board).unwrap().direction, Direction::SouthEast);
    }
}
