//! The mailbox board: cell contents and side to move.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::geometry::BOARD_SIZE;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// A position snapshot: 180 mailbox cells plus the side to move.
///
/// Consumers of this core (exchange evaluation, hashing) only read
/// boards; the mutating API exists for the embedding engine and for test
/// construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
    side_to_move: Color,
}

impl Board {
    /// Create a board with all 64 playable squares empty and White to
    /// move.
    pub fn empty() -> Board {
        let mut cells = [Cell::Border; BOARD_SIZE];
        for sq in Square::all() {
            cells[sq.mailbox() as usize] = Cell::Empty;
        }
        Board {
            cells,
            side_to_move: Color::White,
        }
    }

    /// Read a cell by mailbox index. Total: out-of-table indices read as
    /// [`Cell::Border`], so ray and jump probes need no bounds checks.
    #[inline]
    pub fn cell(&self, index: i16) -> Cell {
        if index < 0 {
            return Cell::Border;
        }
        self.cells
            .get(index as usize)
            .copied()
            .unwrap_or(Cell::Border)
    }

    /// Return the piece on a playable square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.mailbox() as usize].piece()
    }

    /// Place a piece on a playable square, replacing any occupant.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.mailbox() as usize] = Cell::Occupied(piece);
    }

    /// Remove and return the piece on a playable square.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let taken = self.piece_at(square);
        self.cells[square.mailbox() as usize] = Cell::Empty;
        taken
    }

    /// Place a piece by raw mailbox index.
    ///
    /// Border and out-of-table indices are rejected: border cells never
    /// hold a piece.
    pub fn place_at(&mut self, index: i16, piece: Piece) -> Result<(), BoardError> {
        match Square::from_mailbox(index) {
            Some(square) => {
                self.place(square, piece);
                Ok(())
            }
            None => Err(BoardError::OffBoard { index }),
        }
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return a displayable wrapper that renders the playable region.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({} to move)", self.side_to_move)
    }
}

/// Renders the 8×8 region with Unicode glyphs, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::ALL {
                let square = Square::new(file, rank);
                match self.0.piece_at(square) {
                    Some(piece) => write!(f, " {}", piece.glyph())?,
                    None => write!(f, " ·")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h ({} to move)", self.0.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn empty_board_cell_states() {
        let board = Board::empty();
        let mut empty = 0;
        let mut border = 0;
        for index in 0..180 {
            match board.cell(index) {
                Cell::Empty => empty += 1,
                Cell::Border => border += 1,
                Cell::Occupied(_) => panic!("piece on an empty board"),
            }
        }
        assert_eq!(empty, 64);
        assert_eq!(border, 116);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn out_of_table_reads_as_border() {
        let board = Board::empty();
        assert!(board.cell(-1).is_border());
        assert!(board.cell(-31).is_border());
        assert!(board.cell(180).is_border());
        assert!(board.cell(i16::MAX).is_border());
    }

    #[test]
    fn place_and_remove() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        board.place(Square::D5, rook);
        assert_eq!(board.piece_at(Square::D5), Some(rook));
        assert_eq!(board.cell(Square::D5.mailbox()).piece(), Some(rook));
        assert_eq!(board.remove(Square::D5), Some(rook));
        assert_eq!(board.piece_at(Square::D5), None);
        assert_eq!(board.remove(Square::D5), None);
    }

    #[test]
    fn place_at_rejects_border_indices() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(board.place_at(Square::E4.mailbox(), pawn), Ok(()));
        assert_eq!(
            board.place_at(0, pawn),
            Err(BoardError::OffBoard { index: 0 })
        );
        assert_eq!(
            board.place_at(32, pawn),
            Err(BoardError::OffBoard { index: 32 })
        );
        assert_eq!(
            board.place_at(-7, pawn),
            Err(BoardError::OffBoard { index: -7 })
        );
    }

    #[test]
    fn side_to_move_roundtrip() {
        let mut board = Board::empty();
        board.set_side_to_move(Color::Black);
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn pretty_renders_glyphs_and_placeholders() {
        let mut board = Board::empty();
        board.place(Square::E1, Piece::new(PieceKind::King, Color::White));
        board.place(Square::E8, Piece::new(PieceKind::King, Color::Black));
        let rendered = format!("{}", board.pretty());
        assert!(rendered.contains('♔'));
        assert!(rendered.contains('♚'));
        assert!(rendered.contains('·'));
        assert!(rendered.contains("w to move"));
    }
}
