//! Castling rights.

use std::fmt;

/// One of the four castling rights, in the fixed key-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingRight {
    WhiteKingside = 0,
    WhiteQueenside = 1,
    BlackKingside = 2,
    BlackQueenside = 3,
}

impl CastlingRight {
    /// Total number of castling rights.
    pub const COUNT: usize = 4;

    /// All rights in index order.
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingside,
        CastlingRight::WhiteQueenside,
        CastlingRight::BlackKingside,
        CastlingRight::BlackQueenside,
    ];

    /// Return the index (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the FEN character for this right.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingside => 'K',
            CastlingRight::WhiteQueenside => 'Q',
            CastlingRight::BlackKingside => 'k',
            CastlingRight::BlackQueenside => 'q',
        }
    }
}

impl fmt::Display for CastlingRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
