//! Random playouts (uniform random game simulation).
//!
//! A playout picks uniformly among the legal moves until the game ends. It
//! does no evaluation; it exists to exercise the rules end to end, for the
//! `demo` subcommand and for invariant tests.

use std::io;

use tracing::debug;

use crate::board::{Board, Coord, Player};
use crate::game::{BoardSink, GameController, GameError, MoveSource};
use crate::rules::{Outcome, winner};

/// A move source that plays a uniformly random legal move.
pub struct RandomMoves {
    rng: fastrand::Rng,
}

impl RandomMoves {
    /// Seeded for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }
}

impl MoveSource for RandomMoves {
    fn next_move(
        &mut self,
        _board: &Board,
        _player: Player,
        legal: &[Coord],
    ) -> io::Result<Option<Coord>> {
        if legal.is_empty() {
            return Ok(None);
        }
        Ok(Some(legal[self.rng.usize(..legal.len())]))
    }
}

impl BoardSink for RandomMoves {}

/// Summary of one finished playout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayoutResult {
    pub outcome: Outcome,
    pub black: usize,
    pub white: usize,
    pub moves: usize,
}

/// Play a whole game with both sides drawn from `source`.
pub fn playout(source: &mut RandomMoves) -> Result<PlayoutResult, GameError> {
    let mut game = GameController::new();
    // RandomMoves never declines a non-empty move list, so run() only
    // stops at a terminal board.
    let outcome = game.run(source)?.unwrap_or_else(|| winner(game.board()));
    let (black, white) = game.board().count();
    let result = PlayoutResult {
        outcome,
        black,
        white,
        moves: game.moves_played(),
    };
    debug!(?result, "playout finished");
    Ok(result)
}
