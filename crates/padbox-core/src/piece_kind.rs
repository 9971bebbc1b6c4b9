//! Piece kinds.

use std::fmt;

/// The kind of a piece, without color information.
///
/// The index order (pawn first, king last) is load-bearing: it is the
/// Zobrist key draw order and the order of the exchange value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a piece kind from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<PieceKind> {
        match index {
            0 => Some(PieceKind::Pawn),
            1 => Some(PieceKind::Knight),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Return the one-hot flag value of the legacy packed cell encoding
    /// (pawn=2, knight=4, bishop=8, rook=16, queen=32, king=64).
    #[inline]
    pub const fn flag(self) -> u8 {
        2u8 << (self as u8)
    }

    /// Return the FEN character for this piece kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a FEN character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn index_order() {
        assert_eq!(PieceKind::Pawn.index(), 0);
        assert_eq!(PieceKind::Knight.index(), 1);
        assert_eq!(PieceKind::Bishop.index(), 2);
        assert_eq!(PieceKind::Rook.index(), 3);
        assert_eq!(PieceKind::Queen.index(), 4);
        assert_eq!(PieceKind::King.index(), 5);
    }

    #[test]
    fn from_index_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index() as u8), Some(kind));
        }
        assert_eq!(PieceKind::from_index(6), None);
    }

    #[test]
    fn legacy_flags_are_one_hot() {
        assert_eq!(PieceKind::Pawn.flag(), 2);
        assert_eq!(PieceKind::Knight.flag(), 4);
        assert_eq!(PieceKind::Bishop.flag(), 8);
        assert_eq!(PieceKind::Rook.flag(), 16);
        assert_eq!(PieceKind::Queen.flag(), 32);
        assert_eq!(PieceKind::King.flag(), 64);
        for kind in PieceKind::ALL {
            assert_eq!(kind.flag().count_ones(), 1);
        }
    }

    #[test]
    fn fen_char_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.fen_char();
            assert_eq!(PieceKind::from_fen_char(c), Some(kind));
            assert_eq!(PieceKind::from_fen_char(c.to_ascii_uppercase()), Some(kind));
        }
        assert_eq!(PieceKind::from_fen_char('x'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Knight), "n");
        assert_eq!(format!("{}", PieceKind::Queen), "q");
    }
}
