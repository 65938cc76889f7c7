//! Ocelo: rules engine for an 8x8 stone-flipping board game (Othello/Reversi).
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and the eight capture directions
//! - [`board`] - Board state, cells, players and coordinates
//! - [`rules`] - Legal moves, captures, terminal detection and the winner
//! - [`game`] - Turn state machine with forced passes
//! - [`shell`] - Line-based text front end
//! - [`playout`] - Random games for demos and testing
//!
//! ## Example
//!
//! ```
//! use ocelo::board::{Cell, Coord, Player};
//! use ocelo::rules::{apply_move, legal_moves, new_game};
//!
//! let mut board = new_game();
//! assert_eq!(legal_moves(&board, Player::Black).len(), 4);
//!
//! apply_move(&mut board, Coord::new(2, 3), Player::Black).unwrap();
//! assert_eq!(board.get(Coord::new(3, 3)), Ok(Cell::Black));
//! assert_eq!(board.count(), (4, 1));
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod playout;
pub mod rules;
pub mod shell;
