//! Playable board squares, addressed by mailbox index.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSquareError;
use crate::file::File;
use crate::geometry::mailbox_index;
use crate::rank::Rank;

/// A playable square, stored as its mailbox index (33..=145).
///
/// Only the 64 indices of the 8×8 region are representable; border cells
/// have no `Square`. Raw index arithmetic (ray stepping, jump probes)
/// happens on plain `i16` values and converts back through
/// [`Square::from_mailbox`] only when a playable square is required.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of playable squares.
    pub const COUNT: usize = 64;

    /// Create a square from a file and a rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(mailbox_index(file.number(), rank.number()) as u8)
    }

    /// Create a square from a mailbox index, returning `None` for border
    /// and out-of-table indices.
    #[inline]
    pub const fn from_mailbox(index: i16) -> Option<Square> {
        if index < 17 {
            return None;
        }
        let offset = index - 17;
        let rank = offset / 15;
        let file = offset - rank * 15;
        if rank >= 1 && rank <= 8 && file >= 1 && file <= 8 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Return the mailbox index (33..=145).
    #[inline]
    pub const fn mailbox(self) -> i16 {
        self.0 as i16
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match (self.0 as i16 - 17) % 15 {
            1 => File::FileA,
            2 => File::FileB,
            3 => File::FileC,
            4 => File::FileD,
            5 => File::FileE,
            6 => File::FileF,
            7 => File::FileG,
            _ => File::FileH,
        }
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match (self.0 as i16 - 17) / 15 {
            1 => Rank::Rank1,
            2 => Rank::Rank2,
            3 => Rank::Rank3,
            4 => Rank::Rank4,
            5 => Rank::Rank5,
            6 => Rank::Rank6,
            7 => Rank::Rank7,
            _ => Rank::Rank8,
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&bytes[0]) || !(b'1'..=b'8').contains(&bytes[1]) {
            return None;
        }
        let file = File::from_index(bytes[0] - b'a')?;
        let rank = Rank::from_index(bytes[1] - b'1')?;
        Some(Square::new(file, rank))
    }

    /// Iterate over all 64 squares, rank-major from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Square::new(file, rank)))
    }

    // Named square constants (mailbox indices).
    pub const A1: Square = Square(33);
    pub const B1: Square = Square(34);
    pub const C1: Square = Square(35);
    pub const D1: Square = Square(36);
    pub const E1: Square = Square(37);
    pub const F1: Square = Square(38);
    pub const G1: Square = Square(39);
    pub const H1: Square = Square(40);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A3: Square = Square(63);
    pub const B3: Square = Square(64);
    pub const C3: Square = Square(65);
    pub const D3: Square = Square(66);
    pub const E3: Square = Square(67);
    pub const F3: Square = Square(68);
    pub const G3: Square = Square(69);
    pub const H3: Square = Square(70);
    pub const A4: Square = Square(78);
    pub const B4: Square = Square(79);
    pub const C4: Square = Square(80);
    pub const D4: Square = Square(81);
    pub const E4: Square = Square(82);
    pub const F4: Square = Square(83);
    pub const G4: Square = Square(84);
    pub const H4: Square = Square(85);
    pub const A5: Square = Square(93);
    pub const B5: Square = Square(94);
    pub const C5: Square = Square(95);
    pub const D5: Square = Square(96);
    pub const E5: Square = Square(97);
    pub const F5: Square = Square(98);
    pub const G5: Square = Square(99);
    pub const H5: Square = Square(100);
    pub const A6: Square = Square(108);
    pub const B6: Square = Square(109);
    pub const C6: Square = Square(110);
    pub const D6: Square = Square(111);
    pub const E6: Square = Square(112);
    pub const F6: Square = Square(113);
    pub const G6: Square = Square(114);
    pub const H6: Square = Square(115);
    pub const A7: Square = Square(123);
    pub const B7: Square = Square(124);
    pub const C7: Square = Square(125);
    pub const D7: Square = Square(126);
    pub const E7: Square = Square(127);
    pub const F7: Square = Square(128);
    pub const G7: Square = Square(129);
    pub const H7: Square = Square(130);
    pub const A8: Square = Square(138);
    pub const B8: Square = Square(139);
    pub const C8: Square = Square(140);
    pub const D8: Square = Square(141);
    pub const E8: Square = Square(142);
    pub const F8: Square = Square(143);
    pub const G8: Square = Square(144);
    pub const H8: Square = Square(145);
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_algebraic(s).ok_or_else(|| ParseSquareError(s.to_owned()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
