// Fixed-depth minimax search with alpha-beta pruning
//
// The root player maximizes, the opponent minimizes. Every node scores
// leaves from the root player's point of view. Each hypothetical turn is
// applied to a fresh copy of the board, with the removal picked by the
// removal selector, so sibling branches never share state.

use log::debug;

use crate::board::IsolaBoard;
use crate::config::EvaluationConfig;
use crate::error::AgentError;
use crate::evaluation::score;
use crate::movegen::legal_directions;
use crate::removal::choose_removal;
use crate::types::{Direction, Player};

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub direction: Direction,
    /// Minimax value of `direction` from the root player's side
    pub score: f64,
    /// Value-function calls made below the root
    pub nodes: u64,
}

/// Per-search state threaded through the recursion
struct Searcher<'a> {
    root: Player,
    params: &'a EvaluationConfig,
    nodes: u64,
}

/// Searches `depth` plies and returns the best direction for `player`
/// together with its value and the node count.
///
/// Fails with `NoLegalMove` when `player` cannot move at all.
pub fn search<B: IsolaBoard>(
    board: &B,
    player: Player,
    depth: u8,
    params: &EvaluationConfig,
) -> Result<SearchResult, AgentError> {
    search_with_window(board, player, depth, f64::NEG_INFINITY, f64::INFINITY, params)
}

/// Root of the search: maximizes over `player`'s moves, answering each with
/// the opponent's best reply. Ties keep the earliest direction in
/// `Direction::all()` order.
pub fn choose_direction<B: IsolaBoard>(
    board: &B,
    player: Player,
    depth: u8,
    alpha: f64,
    beta: f64,
    params: &EvaluationConfig,
) -> Result<Direction, AgentError> {
    search_with_window(board, player, depth, alpha, beta, params).map(|result| result.direction)
}

fn search_with_window<B: IsolaBoard>(
    board: &B,
    player: Player,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    params: &EvaluationConfig,
) -> Result<SearchResult, AgentError> {
    let mut searcher = Searcher {
        root: player,
        params,
        nodes: 0,
    };

    let mut best: Option<(Direction, f64)> = None;

    for dir in legal_directions(board, player) {
        let child = future_board(board, player, dir)?;
        let value = searcher.min_value(&child, depth.saturating_sub(1), alpha, beta)?;
        debug!("root {} {}: {}", player, dir.as_str(), value);

        if best.map_or(true, |(_, best_score)| value > best_score) {
            best = Some((dir, value));
        }

        let best_score = best.map_or(value, |(_, s)| s);
        if best_score >= beta {
            break;
        }
        alpha = alpha.max(best_score);
    }

    let (direction, score) = best.ok_or(AgentError::NoLegalMove(player))?;
    Ok(SearchResult {
        direction,
        score,
        nodes: searcher.nodes,
    })
}

/// Board after `mover` steps in `direction` and removes the selector's cell
pub fn future_board<B: IsolaBoard>(
    board: &B,
    mover: Player,
    direction: Direction,
) -> Result<B, AgentError> {
    let remove = choose_removal(board, mover, direction).ok_or(AgentError::NoRemovalTarget {
        player: mover,
        direction,
    })?;

    let mut next = board.clone();
    next.apply_move(mover, direction, remove)?;
    Ok(next)
}

impl Searcher<'_> {
    /// Value of a node where the root player is to move
    fn max_value<B: IsolaBoard>(
        &mut self,
        board: &B,
        depth: u8,
        mut alpha: f64,
        beta: f64,
    ) -> Result<f64, AgentError> {
        self.nodes += 1;

        let moves = legal_directions(board, self.root);
        if depth == 0 || moves.is_empty() {
            return Ok(score(board, self.root, self.params));
        }

        let mut value = f64::NEG_INFINITY;
        for dir in moves {
            let child = future_board(board, self.root, dir)?;
            value = value.max(self.min_value(&child, depth - 1, alpha, beta)?);
            if value >= beta {
                break;
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    /// Value of a node where the opponent is to move
    fn min_value<B: IsolaBoard>(
        &mut self,
        board: &B,
        depth: u8,
        alpha: f64,
        mut beta: f64,
    ) -> Result<f64, AgentError> {
        self.nodes += 1;

        let mover = self.root.opponent();
        let moves = legal_directions(board, mover);
        if depth == 0 || moves.is_empty() {
            return Ok(score(board, self.root, self.params));
        }

        let mut value = f64::INFINITY;
        for dir in moves {
            let child = future_board(board, mover, dir)?;
            value = value.min(self.max_value(&child, depth - 1, alpha, beta)?);
            if value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}
