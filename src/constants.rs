//! Board geometry and rendering constants.
//!
//! The rules are fixed: one 8x8 board, one initial placement and the
//! eight-direction capture rule. Nothing here is configurable at runtime.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Upper-left cell of the central 2x2 block where the game starts.
pub const CENTER: usize = BOARD_SIZE / 2 - 1;

// =============================================================================
// Directions
// =============================================================================

/// Unit steps `(d_row, d_col)` to the eight neighbouring cells.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Cell Glyphs (text rendering)
// =============================================================================

/// Black stone.
pub const GLYPH_BLACK: char = 'B';

/// White stone.
pub const GLYPH_WHITE: char = 'W';

/// Empty cell.
pub const GLYPH_EMPTY: char = '.';
