//! Move representation, bit-packed into a u32.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

// Private bit-field constants.
const ORIGIN_MASK: u32 = 0x0000_00FF;
const DEST_MASK: u32 = 0x0000_FF00;
const CAPTURED_MASK: u32 = 0x0007_0000;
const DEST_SHIFT: u32 = 8;
const CAPTURED_SHIFT: u32 = 16;

/// A move encoded in 32 bits, with value semantics.
///
/// ```text
/// bits  0-7:  origin mailbox index      (33-145)
/// bits  8-15: destination mailbox index (33-145)
/// bits 16-18: captured piece kind, biased by one (0 = no capture)
/// ```
///
/// The accessors are total over anything the constructors produce;
/// hand-rolled raw values are a caller error.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Move {
    /// Create a non-capturing move.
    pub const fn new(origin: Square, dest: Square) -> Move {
        Move((origin.mailbox() as u32) | ((dest.mailbox() as u32) << DEST_SHIFT))
    }

    /// Create a capturing move recording the victim's kind.
    pub const fn new_capture(origin: Square, dest: Square, captured: PieceKind) -> Move {
        Move(
            (origin.mailbox() as u32)
                | ((dest.mailbox() as u32) << DEST_SHIFT)
                | ((captured.index() as u32 + 1) << CAPTURED_SHIFT),
        )
    }

    /// Return the origin mailbox index.
    #[inline]
    pub const fn origin(self) -> i16 {
        (self.0 & ORIGIN_MASK) as i16
    }

    /// Return the destination mailbox index.
    #[inline]
    pub const fn dest(self) -> i16 {
        ((self.0 & DEST_MASK) >> DEST_SHIFT) as i16
    }

    /// Return the captured piece kind, or `None` for a quiet move.
    #[inline]
    pub const fn captured(self) -> Option<PieceKind> {
        match (self.0 & CAPTURED_MASK) >> CAPTURED_SHIFT {
            0 => None,
            biased => PieceKind::from_index(biased as u8 - 1),
        }
    }

    /// Return the origin as a playable square.
    #[inline]
    pub const fn origin_square(self) -> Option<Square> {
        Square::from_mailbox(self.origin())
    }

    /// Return the destination as a playable square.
    #[inline]
    pub const fn dest_square(self) -> Option<Square> {
        Square::from_mailbox(self.dest())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.origin_square(), self.dest_square()) {
            (Some(origin), Some(dest)) => write!(f, "{origin}{dest}"),
            _ => write!(f, "????"),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured() {
            Some(kind) => write!(f, "Move({} x{})", self, kind),
            None => write!(f, "Move({})", self),
        }
    }
}
