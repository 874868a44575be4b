// Legal pawn moves

use crate::board::IsolaBoard;
use crate::types::{Direction, Player};

/// All directions `player` may step in, in enumeration order.
/// Empty when the pawn is boxed in.
pub fn legal_directions<B: IsolaBoard>(board: &B, player: Player) -> Vec<Direction> {
    Direction::all()
        .into_iter()
        .filter(|&dir| board.legal_move(player, dir))
        .collect()
}

/// Number of legal directions, without allocating
pub fn mobility<B: IsolaBoard>(board: &B, player: Player) -> usize {
    Direction::all()
        .into_iter()
        .filter(|&dir| board.legal_move(player, dir))
        .count()
}
