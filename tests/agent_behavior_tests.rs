//! End-to-end behaviour of the minimax agent through the public API.

use isola_agent::agent::{Agent, MinimaxAgent};
use isola_agent::board::{Board, IsolaBoard};
use isola_agent::config::Config;
use isola_agent::error::AgentError;
use isola_agent::movegen::legal_directions;
use isola_agent::removal::choose_removal;
use isola_agent::search::{choose_direction, search};
use isola_agent::types::{Action, Cell, Direction, Player};

fn agent(player: Player, depth: u8) -> MinimaxAgent {
    MinimaxAgent::new(player, &Config::default_hardcoded()).with_depth(depth)
}

/// 3x3 board, First at (0,0), Second at (2,2), depth 2.
///
/// First's moves and the board each leaves (removal next to Second):
///   S  -> "...", "1.#", "..2"   Second replies N/W/NW, best for Second -12
///   E  -> ".1.", "..#", "..2"   best reply -13
///   SE -> "...", ".1#", "..2"   Second can only go W, removing (0,1):
///         ".#.", ".1#", ".2."   5 free >= 5, early game: 5 - 3*3 = -4
/// so First plays SE and removes (1,2).
#[test]
fn test_three_by_three_depth_two_scenario() {
    let board = Board::from_rows(&["1..", "...", "..2"]).unwrap();
    let params = Config::default_hardcoded().evaluation;

    let result = search(&board, Player::First, 2, &params).unwrap();
    assert_eq!(result.direction, Direction::SouthEast);
    assert_eq!(result.score, -4.0);

    let action = agent(Player::First, 2).next_action(&board).unwrap();
    assert_eq!(action, Action::new(Direction::SouthEast, Cell::new(1, 2)));
}

#[test]
fn test_three_by_three_mirror_for_second_player() {
    let board = Board::from_rows(&["1..", "...", "..2"]).unwrap();
    let action = agent(Player::Second, 2).next_action(&board).unwrap();
    assert_eq!(action, Action::new(Direction::NorthWest, Cell::new(0, 1)));
}

#[test]
fn test_choose_direction_with_explicit_window() {
    let board = Board::from_rows(&["1..", "...", "..2"]).unwrap();
    let params = Config::default_hardcoded().evaluation;
    let dir = choose_direction(
        &board,
        Player::First,
        2,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &params,
    )
    .unwrap();
    assert_eq!(dir, Direction::SouthEast);
}

#[test]
fn test_immobile_root_player_is_rejected() {
    let board = Board::from_rows(&["1#...", "##...", ".....", ".....", "....2"]).unwrap();
    assert!(legal_directions(&board, Player::First).is_empty());
    assert_eq!(
        agent(Player::First, 4).next_action(&board),
        Err(AgentError::NoLegalMove(Player::First))
    );
}

#[test]
fn test_takes_the_only_escape() {
    // First's only step is east; any other would be illegal
    let board = Board::from_rows(&["#1.#", "####", "....", "...2"]).unwrap();
    let action = agent(Player::First, 4).next_action(&board).unwrap();
    assert_eq!(action.direction, Direction::East);
    assert!(board.legal_move_removing(Player::First, action.direction, action.remove));
}

#[test]
fn test_default_depth_opening_on_seven_by_seven() {
    let board = Board::new(7, 7).unwrap();
    let mut agent = MinimaxAgent::new(Player::First, &Config::default_hardcoded());
    let action = agent.next_action(&board).unwrap();

    assert!(legal_directions(&board, Player::First).contains(&action.direction));
    assert_eq!(
        Some(action.remove),
        choose_removal(&board, Player::First, action.direction)
    );
    assert!(board.legal_move_removing(Player::First, action.direction, action.remove));

    // Same input, same answer
    assert_eq!(agent.next_action(&board).unwrap(), action);
}
