//! Turn alternation: whose move it is, forced passes and the end of the game.
//!
//! The controller owns the board. Moves come from a [`MoveSource`] and board
//! updates go out through a [`BoardSink`]; neither keeps the board between
//! turns.

use std::io;

use tracing::info;

use crate::board::{Board, Coord, Player, Snapshot};
use crate::rules::{InvalidMoveError, Outcome, apply_move, legal_moves, new_game, winner};

/// Supplies the active player's move.
pub trait MoveSource {
    /// Pick one of `legal` (never empty). `Ok(None)` means no move is
    /// available, e.g. input ended; the game is then abandoned.
    fn next_move(
        &mut self,
        board: &Board,
        player: Player,
        legal: &[Coord],
    ) -> io::Result<Option<Coord>>;
}

/// Receives board snapshots and turn notices for rendering.
pub trait BoardSink {
    /// Called before each move request.
    fn show(&mut self, _snapshot: &Snapshot, _to_move: Player, _legal: &[Coord]) -> io::Result<()> {
        Ok(())
    }

    /// `player` had no legal move and was skipped.
    fn passed(&mut self, _player: Player) -> io::Result<()> {
        Ok(())
    }

    fn finished(&mut self, _snapshot: &Snapshot, _outcome: Outcome) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    #[error("move source failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing(Player),
    Terminal,
}

/// What a single [`GameController::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Placed {
        player: Player,
        at: Coord,
        flipped: usize,
    },
    /// The player had no legal move; the turn went to the opponent
    /// without touching the board.
    Passed(Player),
    Finished(Outcome),
    /// The move source had no move to give.
    Abandoned,
}

pub struct GameController {
    board: Board,
    state: GameState,
    moves_played: usize,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Black to move on the initial board.
    pub fn new() -> Self {
        Self::from_board(new_game(), Player::Black)
    }

    /// Resume from an arbitrary position with `to_move` active.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            state: GameState::Playing(to_move),
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Legal moves of the active player; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        match self.state {
            GameState::Playing(p) => legal_moves(&self.board, p),
            GameState::Terminal => Vec::new(),
        }
    }

    /// Result by stone count, once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Terminal => Some(winner(&self.board)),
            GameState::Playing(_) => None,
        }
    }

    /// Perform one transition of the turn state machine.
    ///
    /// An illegal move from `source` is returned as
    /// [`GameError::InvalidMove`] with board and state unchanged.
    pub fn step(&mut self, source: &mut impl MoveSource) -> Result<Step, GameError> {
        let player = match self.state {
            GameState::Terminal => return Ok(Step::Finished(winner(&self.board))),
            GameState::Playing(p) => p,
        };

        let legal = legal_moves(&self.board, player);
        if legal.is_empty() {
            if legal_moves(&self.board, player.opponent()).is_empty() {
                self.state = GameState::Terminal;
                let outcome = winner(&self.board);
                let (black, white) = self.board.count();
                info!(?outcome, black, white, moves = self.moves_played, "game over");
                return Ok(Step::Finished(outcome));
            }
            info!(%player, "no legal move, passing");
            self.state = GameState::Playing(player.opponent());
            return Ok(Step::Passed(player));
        }

        let Some(at) = source.next_move(&self.board, player, &legal)? else {
            return Ok(Step::Abandoned);
        };

        let before = opponent_stones(&self.board, player);
        apply_move(&mut self.board, at, player)?;
        let flipped = before - opponent_stones(&self.board, player);

        self.moves_played += 1;
        self.state = GameState::Playing(player.opponent());
        Ok(Step::Placed {
            player,
            at,
            flipped,
        })
    }

    /// Play until the game ends (`Some(outcome)`) or the source gives up
    /// (`None`), reporting to `io` along the way.
    pub fn run<T>(&mut self, io: &mut T) -> Result<Option<Outcome>, GameError>
    where
        T: MoveSource + BoardSink,
    {
        loop {
            if let GameState::Playing(player) = self.state {
                let legal = legal_moves(&self.board, player);
                if !legal.is_empty() {
                    io.show(&self.board.snapshot(), player, &legal)?;
                }
            }
            match self.step(io)? {
                Step::Placed { .. } => {}
                Step::Passed(player) => io.passed(player)?,
                Step::Finished(outcome) => {
                    io.finished(&self.board.snapshot(), outcome)?;
                    return Ok(Some(outcome));
                }
                Step::Abandoned => return Ok(None),
            }
        }
    }
}

fn opponent_stones(board: &Board, player: Player) -> usize {
    let (black, white) = board.count();
    match player {
        Player::Black => white,
        Player::White => black,
    }
}
