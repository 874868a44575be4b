// Static position evaluation
//
// Scores a board by mobility difference. The weight on the opponent's
// mobility drops as the board fills up: restricting the opponent matters
// most early, raw parity matters most late.

use crate::board::IsolaBoard;
use crate::config::EvaluationConfig;
use crate::movegen::mobility;
use crate::types::Player;

/// Game phase derived from how much of the board is still free
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Early,
    Middle,
    End,
}

impl GamePhase {
    /// Weight applied to the opponent's mobility in this phase
    pub fn opponent_weight(self, params: &EvaluationConfig) -> f64 {
        match self {
            GamePhase::Early => params.early_game_opponent_weight,
            GamePhase::Middle => params.midgame_opponent_weight,
            GamePhase::End => params.endgame_opponent_weight,
        }
    }
}

/// Classifies the board by free-cell count against `rows * cols - 2`
pub fn game_phase<B: IsolaBoard>(board: &B, params: &EvaluationConfig) -> GamePhase {
    let total = (board.max_rows() * board.max_cols()).saturating_sub(2) as f64;
    let free = board.free_cells() as f64;

    if free >= (total * params.early_game_threshold).ceil() {
        GamePhase::Early
    } else if free >= (total * params.midgame_threshold).ceil() {
        GamePhase::Middle
    } else {
        GamePhase::End
    }
}

/// Score of `board` from `player`'s point of view, higher is better
pub fn score<B: IsolaBoard>(board: &B, player: Player, params: &EvaluationConfig) -> f64 {
    let own = mobility(board, player) as f64;
    let opponent = mobility(board, player.opponent()) as f64;
    let weight = game_phase(board, params).opponent_weight(params);

    own - weight * opponent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Cell;

    /// 7x7 board with pawns in opposite corners and `removed` cells taken
    /// away from the middle, never touching either pawn's neighbourhood.
    fn corner_board(removed: usize) -> Board {
        let mut board =
            Board::with_positions(7, 7, Cell::new(0, 0), Cell::new(6, 6)).unwrap();
        let protected = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(6, 5),
            Cell::new(5, 5),
        ];
        let candidates = (0..7)
            .flat_map(|row| (0..7).map(move |col| Cell::new(row, col)))
            .filter(|cell| !protected.contains(cell));
        for cell in candidates.take(removed) {
            board.remove(cell).unwrap();
        }
        board
    }

    #[test]
    fn test_phase_boundaries_on_seven_by_seven() {
        // 47 playable cells: early needs ceil(28.2) = 29 free, midgame ceil(14.1) = 15
        let params = EvaluationConfig::default();

        let board = corner_board(18);
        assert_eq!(board.free_cells(), 29);
        assert_eq!(game_phase(&board, &params), GamePhase::Early);

        let board = corner_board(19);
        assert_eq!(board.free_cells(), 28);
        assert_eq!(game_phase(&board, &params), GamePhase::Middle);

        let board = corner_board(32);
        assert_eq!(board.free_cells(), 15);
        assert_eq!(game_phase(&board, &params), GamePhase::Middle);

        let board = corner_board(33);
        assert_eq!(board.free_cells(), 14);
        assert_eq!(game_phase(&board, &params), GamePhase::End);
    }

    #[test]
    fn test_score_weight_switches_at_boundaries() {
        // Both corner pawns keep 3 moves, so score = 3 - 3 * weight
        let params = EvaluationConfig::default();
        assert_eq!(score(&corner_board(18), Player::First, &params), -6.0);
        assert_eq!(score(&corner_board(19), Player::First, &params), -3.0);
        assert_eq!(score(&corner_board(32), Player::First, &params), -3.0);
        assert_eq!(score(&corner_board(33), Player::First, &params), 0.0);
    }

    #[test]
    fn test_fresh_board_is_early_game() {
        let board = Board::new(7, 7).unwrap();
        assert_eq!(game_phase(&board, &EvaluationConfig::default()), GamePhase::Early);
    }

    #[test]
    fn test_immobile_opponent_scores_own_mobility_in_every_phase() {
        let params = EvaluationConfig::default();
        let early = Board::from_rows(&["2#...", "##...", ".....", "..1..", "....."]).unwrap();
        let late = Board::from_rows(&["2#..#", "##.##", "#####", "##1.#", "###.#"]).unwrap();

        assert_eq!(game_phase(&early, &params), GamePhase::Early);
        assert_eq!(game_phase(&late, &params), GamePhase::End);
        assert_eq!(score(&early, Player::First, &params), 8.0);
        assert_eq!(score(&late, Player::First, &params), 2.0);
    }

    #[test]
    fn test_score_is_from_requested_perspective() {
        let params = EvaluationConfig::default();
        let board = Board::from_rows(&["1..", "...", "..2"]).unwrap();
        // 3x3: 7 playable, 7 free -> early game, both pawns have 3 moves
        assert_eq!(score(&board, Player::First, &params), -6.0);
        assert_eq!(score(&board, Player::Second, &params), -6.0);

        let board = Board::from_rows(&["1#.", "...", "..2"]).unwrap();
        // 6 free >= ceil(4.2) = 5 -> still early; first has 2 moves, second 3
        assert_eq!(score(&board, Player::First, &params), 2.0 - 9.0);
        assert_eq!(score(&board, Player::Second, &params), 3.0 - 6.0);
    }
}
