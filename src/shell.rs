//! Line-based text front end.
//!
//! The shell renders the board to a writer and reads moves from a reader,
//! one per line, as two 1-indexed numbers: `row col`.
//!
//! ## Input
//!
//! - `3 4` - place a stone at row 3, column 4
//! - `quit` / `q` - abandon the game
//! - blank line - ask again
//!
//! The shell only hands the controller coordinates that are on the board and
//! in the legal move list; anything else is answered with a message and a new
//! prompt.
//!
//! ## Example
//!
//! ```
//! use ocelo::game::GameController;
//! use ocelo::shell::Shell;
//!
//! let input = b"3 4\nquit\n";
//! let mut output = Vec::new();
//! let mut shell = Shell::new(&input[..], &mut output);
//! let outcome = GameController::new().run(&mut shell).unwrap();
//! assert_eq!(outcome, None);
//! ```

use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::board::{Board, Coord, Player, Snapshot};
use crate::constants::BOARD_SIZE;
use crate::game::{BoardSink, MoveSource};
use crate::rules::Outcome;

/// Why a line of input is not a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected two numbers, got {0:?}")]
    Malformed(String),

    #[error("({row},{col}) is off the board")]
    OffBoard { row: usize, col: usize },
}

/// Parse `row col` (1-indexed) into a 0-indexed [`Coord`].
pub fn parse_move(line: &str) -> Result<Coord, ParseMoveError> {
    let malformed = || ParseMoveError::Malformed(line.trim().to_string());

    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let row: usize = row.parse().map_err(|_| malformed())?;
    let col: usize = col.parse().map_err(|_| malformed())?;

    if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
        return Err(ParseMoveError::OffBoard { row, col });
    }
    Ok(Coord::new(row - 1, col - 1))
}

/// Format a move list as `(r,c), (r,c), ...`.
fn format_moves(moves: &[Coord]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text front end over any reader/writer pair.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl Shell<io::StdinLock<'static>, io::Stdout> {
    /// A shell on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the board and counts without a prompt.
    pub fn print_board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        write!(self.output, "{snapshot}")?;
        writeln!(
            self.output,
            "Black: {} White: {}",
            snapshot.black, snapshot.white
        )?;
        self.output.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "> ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> MoveSource for Shell<R, W> {
    fn next_move(
        &mut self,
        _board: &Board,
        _player: Player,
        legal: &[Coord],
    ) -> io::Result<Option<Coord>> {
        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // End of input.
                writeln!(self.output)?;
                return Ok(None);
            }

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            match parse_move(text) {
                Ok(at) if legal.contains(&at) => return Ok(Some(at)),
                Ok(at) => {
                    trace!(%at, "not a legal move");
                    writeln!(self.output, "You cannot place a stone there.")?;
                }
                Err(err @ ParseMoveError::OffBoard { .. }) => {
                    trace!(%err, "rejected input");
                    writeln!(self.output, "You cannot place a stone there.")?;
                }
                Err(err) => {
                    trace!(%err, "rejected input");
                    writeln!(self.output, "Invalid input format.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> BoardSink for Shell<R, W> {
    fn show(&mut self, snapshot: &Snapshot, to_move: Player, legal: &[Coord]) -> io::Result<()> {
        self.print_board(snapshot)?;
        writeln!(self.output, "{to_move} to move (e.g. 3 4)")?;
        writeln!(self.output, "Valid moves: {}", format_moves(legal))
    }

    fn passed(&mut self, player: Player) -> io::Result<()> {
        writeln!(self.output, "{player} has no valid moves and passes.")
    }

    fn finished(&mut self, snapshot: &Snapshot, outcome: Outcome) -> io::Result<()> {
        write!(self.output, "{snapshot}")?;
        writeln!(
            self.output,
            "Game over. Black: {} White: {}",
            snapshot.black, snapshot.white
        )?;
        let verdict = match outcome {
            Outcome::Winner(Player::Black) => "Black wins",
            Outcome::Winner(Player::White) => "White wins",
            Outcome::Draw => "Draw",
        };
        writeln!(self.output, "{verdict}")?;
        self.output.flush()
    }
}
