//! Move legality, captures and the game result.
//!
//! Both [`legal_moves`] and [`apply_move`] walk the same directional runs, but
//! they use them differently: a cell is legal as soon as one direction
//! captures, while applying a move recolors every capturing direction.

use tracing::{debug, trace};

use crate::board::{Board, Cell, Coord, Player};
use crate::constants::DIRECTIONS;

/// `apply_move` was called with a coordinate that is not a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move for {player} at {at:?}")]
pub struct InvalidMoveError {
    pub at: Coord,
    pub player: Player,
}

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// The fixed starting position.
pub fn new_game() -> Board {
    Board::new()
}

/// Length of the opponent run starting next to `from` along `dir`, if that run
/// is non-empty and closed by one of `player`'s stones. `None` when the run is
/// empty, hits the edge, or ends on an empty cell.
fn capture_run(board: &Board, from: Coord, dir: (isize, isize), player: Player) -> Option<usize> {
    let own = player.to_cell();
    let opp = player.opponent().to_cell();
    let mut len = 0;
    let mut cur = from.step(dir)?;
    while board.at(cur) == opp {
        len += 1;
        cur = cur.step(dir)?;
    }
    (len > 0 && board.at(cur) == own).then_some(len)
}

/// Whether `player` may place a stone at `at`.
pub fn is_legal(board: &Board, at: Coord, player: Player) -> bool {
    if board.get(at) != Ok(Cell::Empty) {
        return false;
    }
    // One capturing direction is enough.
    DIRECTIONS
        .iter()
        .any(|&dir| capture_run(board, at, dir, player).is_some())
}

/// All legal moves for `player`, in row-major order, without duplicates.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    Coord::all()
        .filter(|&at| is_legal(board, at, player))
        .collect()
}

/// The opponent stones that `player` would recolor by playing at `at`,
/// across every capturing direction. Empty if the move is not legal.
pub fn flips(board: &Board, at: Coord, player: Player) -> Vec<Coord> {
    if board.get(at) != Ok(Cell::Empty) {
        return Vec::new();
    }
    let mut out = Vec::new();
    for &dir in &DIRECTIONS {
        let Some(len) = capture_run(board, at, dir, player) else {
            continue;
        };
        let mut cur = at;
        for _ in 0..len {
            // capture_run already walked these cells on the board
            let Some(next) = cur.step(dir) else { break };
            out.push(next);
            cur = next;
        }
    }
    out
}

/// Place `player`'s stone at `at` and recolor every captured run.
///
/// The board is validated before any write: an illegal move leaves it
/// untouched and returns [`InvalidMoveError`].
pub fn apply_move(board: &mut Board, at: Coord, player: Player) -> Result<(), InvalidMoveError> {
    let captured = flips(board, at, player);
    if captured.is_empty() {
        trace!(%player, ?at, "rejected move");
        return Err(InvalidMoveError { at, player });
    }
    let cell = player.to_cell();
    board.put(at, cell);
    for &c in &captured {
        board.put(c, cell);
    }
    debug!(%player, %at, flipped = captured.len(), "placed stone");
    Ok(())
}

/// Neither player has a legal move.
pub fn is_terminal(board: &Board) -> bool {
    legal_moves(board, Player::Black).is_empty() && legal_moves(board, Player::White).is_empty()
}

/// Compare stone counts. Meaningful once the board is terminal, but
/// computed for any board.
pub fn winner(board: &Board) -> Outcome {
    let (black, white) = board.count();
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Player::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    /// Build a board from 8 strings of `.`, `B`, `W`.
    fn board_from(rows: [&str; 8]) -> Board {
        let mut board = Board::empty();
        for (r, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'B' => Cell::Black,
                    'W' => Cell::White,
                    _ => Cell::Empty,
                };
                board.set(c(r, col), cell).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = new_game();
        assert_eq!(
            legal_moves(&board, Player::Black),
            vec![c(2, 3), c(3, 2), c(4, 5), c(5, 4)]
        );
        assert_eq!(
            legal_moves(&board, Player::White),
            vec![c(2, 4), c(3, 5), c(4, 2), c(5, 3)]
        );
    }

    #[test]
    fn test_occupied_cell_never_legal() {
        let board = new_game();
        assert!(!is_legal(&board, c(3, 3), Player::Black));
        assert!(flips(&board, c(3, 3), Player::Black).is_empty());
    }

    #[test]
    fn test_run_to_edge_is_not_a_capture() {
        let board = board_from([
            ".WWWWWWW", "........", "........", "........", "........", "........", "........",
            "........",
        ]);
        assert!(!is_legal(&board, c(0, 0), Player::Black));
    }

    #[test]
    fn test_run_ending_on_empty_is_not_a_capture() {
        let board = board_from([
            ".WW.B...", "........", "........", "........", "........", "........", "........",
            "........",
        ]);
        assert!(!is_legal(&board, c(0, 0), Player::Black));
        assert!(legal_moves(&board, Player::Black).iter().all(|&m| m != c(0, 0)));
    }

    #[test]
    fn test_adjacent_own_stone_is_not_a_capture() {
        let board = board_from([
            ".B......", "........", "........", "........", "........", "........", "........",
            "........",
        ]);
        assert!(legal_moves(&board, Player::Black).is_empty());
    }

    #[test]
    fn test_apply_flips_every_capturing_direction() {
        // Black at (3,3) captures east, south and south-east, but not west
        // (that run reaches the edge).
        let board_before = board_from([
            "........", "........", "........", "WWW.WWB.", "...WW...", "...W.W..", "...B..B.",
            "........",
        ]);
        let mut board = board_before;
        apply_move(&mut board, c(3, 3), Player::Black).unwrap();

        for at in [c(3, 3), c(3, 4), c(3, 5), c(4, 3), c(5, 3), c(4, 4), c(5, 5)] {
            assert_eq!(board.get(at), Ok(Cell::Black), "{at:?}");
        }
        for at in [c(3, 0), c(3, 1), c(3, 2)] {
            assert_eq!(board.get(at), Ok(Cell::White), "{at:?}");
        }
        let (b0, w0) = board_before.count();
        let (b1, w1) = board.count();
        assert_eq!(b1 + w1, b0 + w0 + 1);
        assert_eq!(w0 - w1, 6);
    }

    #[test]
    fn test_illegal_move_leaves_board_unchanged() {
        let mut board = new_game();
        let before = board;
        for at in [c(0, 0), c(3, 3), c(8, 2), c(2, 2)] {
            let err = apply_move(&mut board, at, Player::Black).unwrap_err();
            assert_eq!(err, InvalidMoveError { at, player: Player::Black });
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_winner() {
        let mut board = Board::empty();
        assert_eq!(winner(&board), Outcome::Draw);
        board.set(c(0, 0), Cell::White).unwrap();
        assert_eq!(winner(&board), Outcome::Winner(Player::White));
        board.set(c(0, 1), Cell::Black).unwrap();
        board.set(c(0, 2), Cell::Black).unwrap();
        assert_eq!(winner(&board), Outcome::Winner(Player::Black));
    }

    #[test]
    fn test_full_board_is_terminal() {
        let mut board = Board::empty();
        for at in Coord::all() {
            let cell = if (at.row + at.col) % 2 == 0 { Cell::Black } else { Cell::White };
            board.set(at, cell).unwrap();
        }
        assert!(legal_moves(&board, Player::Black).is_empty());
        assert!(legal_moves(&board, Player::White).is_empty());
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Outcome::Draw);
    }
}
