//! Board state: cells, players, coordinates and stone counting.
//!
//! `Board` is a plain value type. It knows nothing about the rules; legality
//! and captures live in [`crate::rules`].

use std::fmt;

use crate::constants::{BOARD_SIZE, CENTER, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, NUM_CELLS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player whose stone occupies this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Black => GLYPH_BLACK,
            Cell::White => GLYPH_WHITE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value of this player's stones.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(row, col)` pair, 0-indexed.
///
/// Coordinates are not validated on construction; the board rejects
/// out-of-range ones with [`OutOfBounds`]. The derived ordering is row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The neighbouring coordinate one step along `(d_row, d_col)`,
    /// or `None` if that step leaves the board.
    pub fn step(self, (d_row, d_col): (isize, isize)) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = Coord::new(row, col);
        next.in_bounds().then_some(next)
    }

    /// Every coordinate of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

/// 1-indexed `(row,col)`, the form players type and read.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})",
            self.row.saturating_add(1),
            self.col.saturating_add(1)
        )
    }
}

/// Access outside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is off the board")]
pub struct OutOfBounds(pub Coord);

/// An 8x8 grid of cells, row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The fixed starting position: the NW-SE centre cells White,
    /// the NE-SW centre cells Black.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[CENTER][CENTER] = Cell::White;
        board.cells[CENTER + 1][CENTER + 1] = Cell::White;
        board.cells[CENTER][CENTER + 1] = Cell::Black;
        board.cells[CENTER + 1][CENTER] = Cell::Black;
        board
    }

    /// A board with no stones at all. Useful for composing positions.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, at: Coord) -> Result<Cell, OutOfBounds> {
        if !at.in_bounds() {
            return Err(OutOfBounds(at));
        }
        Ok(self.cells[at.row][at.col])
    }

    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<(), OutOfBounds> {
        if !at.in_bounds() {
            return Err(OutOfBounds(at));
        }
        self.cells[at.row][at.col] = cell;
        Ok(())
    }

    /// Unchecked read for coordinates already known to be on the board.
    pub(crate) fn at(&self, at: Coord) -> Cell {
        self.cells[at.row][at.col]
    }

    pub(crate) fn put(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row][at.col] = cell;
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (usize, usize) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Black => (black + 1, white),
                Cell::White => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    pub fn empty_count(&self) -> usize {
        let (black, white) = self.count();
        NUM_CELLS - black - white
    }

    /// Copy of the grid plus both stone counts, for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let (black, white) = self.count();
        Snapshot {
            cells: self.cells,
            black,
            white,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// What a [`crate::game::BoardSink`] receives: the grid and the two counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub black: usize,
    pub white: usize,
}

/// Grid with 1-indexed row and column labels.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (idx, row) in self.cells.iter().enumerate() {
            write!(f, "{}", idx + 1)?;
            for cell in row {
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_placement() {
        let board = Board::new();
        assert_eq!(board.get(Coord::new(3, 3)), Ok(Cell::White));
        assert_eq!(board.get(Coord::new(4, 4)), Ok(Cell::White));
        assert_eq!(board.get(Coord::new(3, 4)), Ok(Cell::Black));
        assert_eq!(board.get(Coord::new(4, 3)), Ok(Cell::Black));
        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::empty();
        let corner = Coord::new(7, 7);
        board.set(corner, Cell::Black).unwrap();
        assert_eq!(board.get(corner), Ok(Cell::Black));

        let off = Coord::new(8, 0);
        assert_eq!(board.get(off), Err(OutOfBounds(off)));
        assert_eq!(board.set(off, Cell::White), Err(OutOfBounds(off)));
        assert_eq!(board.get(Coord::new(0, 8)), Err(OutOfBounds(Coord::new(0, 8))));
    }

    #[test]
    fn test_opponent_is_involution() {
        for p in [Player::Black, Player::White] {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
            assert_eq!(p.to_cell().owner(), Some(p));
        }
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_step_stops_at_edges() {
        assert_eq!(Coord::new(0, 0).step((-1, 0)), None);
        assert_eq!(Coord::new(0, 0).step((0, -1)), None);
        assert_eq!(Coord::new(7, 7).step((1, 1)), None);
        assert_eq!(Coord::new(3, 3).step((1, -1)), Some(Coord::new(4, 2)));
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<Coord> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[1], Coord::new(0, 1));
        assert_eq!(all[8], Coord::new(1, 0));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  1 2 3 4 5 6 7 8");
        assert_eq!(lines[4], "4 . . . W B . . .");
        assert_eq!(lines[5], "5 . . . B W . . .");
        assert_eq!(lines.len(), 9);
        assert_eq!(Coord::new(2, 4).to_string(), "(3,5)");
    }
}
