// Removal selection
//
// After choosing a step, the mover removes a cell next to the opponent when
// it can, trying N, NE, NW, E, W, S, SE, SW around the opponent's pawn.
// Neighbours are judged on the board as it stands before the step, so the
// mover's origin still blocks the opponent and is never picked there.
// Failing that, the first removable cell in row-major order is taken.

use crate::board::IsolaBoard;
use crate::types::{Cell, Direction, Player};

/// Picks the cell `mover` removes after stepping in `direction`.
///
/// Returns None when the step itself is illegal or no cell at all can be
/// removed afterwards.
pub fn choose_removal<B: IsolaBoard>(board: &B, mover: Player, direction: Direction) -> Option<Cell> {
    if !board.legal_move(mover, direction) {
        return None;
    }
    let destination = board.new_location(mover, direction)?;
    let opponent = mover.opponent();

    let near_opponent = Direction::removal_priority()
        .into_iter()
        .filter(|&dir| board.legal_move(opponent, dir))
        .filter_map(|dir| board.new_location(opponent, dir))
        .find(|&cell| cell != destination);

    near_opponent.or_else(|| first_removable(board, mover, direction))
}

/// Row-major scan from (0, 0) for the first cell `mover` may remove
fn first_removable<B: IsolaBoard>(board: &B, mover: Player, direction: Direction) -> Option<Cell> {
    (0..board.max_rows())
        .flat_map(|row| (0..board.max_cols()).map(move |col| Cell::new(row, col)))
        .find(|&cell| board.legal_move_removing(mover, direction, cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_north_of_opponent_wins_over_other_neighbours() {
        let board = Board::from_rows(&[".....", ".....", "..2..", ".....", "1...."]).unwrap();
        assert_eq!(
            choose_removal(&board, Player::First, Direction::East),
            Some(Cell::new(1, 2))
        );
    }

    #[test]
    fn test_priority_order_around_opponent() {
        // Knock out neighbours one at a time and watch the next in line get picked
        let expected = [
            (Direction::North, Cell::new(1, 2)),
            (Direction::NorthEast, Cell::new(1, 3)),
            (Direction::NorthWest, Cell::new(1, 1)),
            (Direction::East, Cell::new(2, 3)),
            (Direction::West, Cell::new(2, 1)),
            (Direction::South, Cell::new(3, 2)),
            (Direction::SouthEast, Cell::new(3, 3)),
            (Direction::SouthWest, Cell::new(3, 1)),
        ];

        let mut board = Board::from_rows(&[".....", ".....", "..2..", ".....", "1...."]).unwrap();
        for (dir, cell) in expected {
            assert_eq!(board.new_location(Player::Second, dir), Some(cell));
            assert_eq!(
                choose_removal(&board, Player::First, Direction::North),
                Some(cell),
                "expected {} of the opponent",
                dir.as_str()
            );
            board.remove(cell).unwrap();
        }
    }

    #[test]
    fn test_skips_cell_the_mover_steps_onto() {
        let board = Board::from_rows(&[".....", ".1...", "..2..", ".....", "....."]).unwrap();
        // Stepping east lands north of the opponent, so north-east is next in line
        assert_eq!(
            choose_removal(&board, Player::First, Direction::East),
            Some(Cell::new(1, 3))
        );
        assert_eq!(
            choose_removal(&board, Player::First, Direction::South),
            Some(Cell::new(1, 2))
        );
    }

    #[test]
    fn test_origin_next_to_opponent_is_not_picked() {
        // The mover's origin sits north of the opponent, so north-east is taken
        let board = Board::from_rows(&["...", ".1.", ".2."]).unwrap();
        assert_eq!(
            choose_removal(&board, Player::First, Direction::North),
            Some(Cell::new(1, 2))
        );
    }

    #[test]
    fn test_neighbour_scan_result_is_a_legal_removal() {
        let board = Board::from_rows(&[".#...", ".1...", ".2#..", ".....", "....."]).unwrap();
        for dir in Direction::all() {
            if let Some(cell) = choose_removal(&board, Player::First, dir) {
                assert!(board.legal_move_removing(Player::First, dir, cell));
                assert_ne!(cell, Cell::new(1, 1), "origin picked for {}", dir.as_str());
            }
        }
    }

    #[test]
    fn test_falls_back_to_row_major_scan() {
        // Opponent walled in: nothing around it can be removed
        let board = Board::from_rows(&["....", "....", "1.##", "..#2"]).unwrap();
        assert_eq!(
            choose_removal(&board, Player::First, Direction::South),
            Some(Cell::new(0, 0))
        );
        let board = Board::from_rows(&["##..", "....", "1.##", "..#2"]).unwrap();
        assert_eq!(
            choose_removal(&board, Player::First, Direction::South),
            Some(Cell::new(0, 2))
        );
    }

    #[test]
    fn test_fallback_can_pick_own_origin() {
        let board = Board::from_rows(&["#1.", "###", "##2"]).unwrap();
        assert_eq!(
            choose_removal(&board, Player::First, Direction::East),
            Some(Cell::new(0, 1))
        );
    }

    #[test]
    fn test_illegal_step_has_no_removal() {
        let board = Board::from_rows(&["1..", "...", "..2"]).unwrap();
        assert_eq!(choose_removal(&board, Player::First, Direction::North), None);
    }
}
