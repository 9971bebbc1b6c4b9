//! Board cell states.

use crate::piece::Piece;

/// The content of one mailbox cell.
///
/// Ray and jump traversal relies on every cell reading as exactly one of
/// three states: off-board border, empty playable square, or an occupied
/// square. The legacy encoding distinguished these with a falsy zero and
/// a 128 flag; the tagged enum makes the distinction explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Off-board sentinel surrounding the playable 8×8 region. Border
    /// cells never hold a piece.
    Border,
    /// An empty playable square.
    Empty,
    /// A playable square holding a piece.
    Occupied(Piece),
}

impl Cell {
    /// Return `true` for the off-board sentinel.
    #[inline]
    pub const fn is_border(self) -> bool {
        matches!(self, Cell::Border)
    }

    /// Return `true` for an empty playable square.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return `true` when the cell holds a piece.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Return the occupying piece, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }
}
