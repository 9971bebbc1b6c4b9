//! Mailbox board geometry: dimensions and directional offset tables.
//!
//! The board is a flat sequence of 15 × 12 = 180 cells. The playable 8×8
//! region sits inside a border of sentinel cells wide enough that every
//! knight jump and every single ray step from a playable square stays
//! within the table. Traversal therefore needs no bounds checks: a probe
//! either lands on a playable cell or reads a border sentinel.

/// Cells per mailbox row.
pub const BOARD_WIDTH: i16 = 15;

/// Mailbox rows.
pub const BOARD_HEIGHT: i16 = 12;

/// Total mailbox cells.
pub const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Map 1-based file and rank coordinates to a mailbox index.
///
/// Pure arithmetic with no validation: out-of-range coordinates produce
/// out-of-table indices, which is exactly what off-board probes need.
#[inline]
pub const fn mailbox_index(file: i16, rank: i16) -> i16 {
    rank * BOARD_WIDTH + file + 17
}

/// Knight jump offsets.
pub const KNIGHT_DELTAS: [i16; 8] = [-31, -29, -17, -13, 13, 17, 29, 31];

/// King (and single queen step) offsets.
pub const KING_DELTAS: [i16; 8] = [-16, -15, -14, -1, 1, 14, 15, 16];

/// Bishop ray directions.
pub const BISHOP_DELTAS: [i16; 4] = [-16, -14, 14, 16];

/// Rook ray directions.
pub const ROOK_DELTAS: [i16; 4] = [-15, -1, 1, 15];
