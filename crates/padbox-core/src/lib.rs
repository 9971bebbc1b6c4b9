//! Position representation for a padded-mailbox chess engine: board
//! encoding, packed moves, and Zobrist key generation.

mod board;
mod castling;
mod cell;
mod chess_move;
mod color;
mod error;
mod file;
mod geometry;
mod mt19937;
mod piece;
mod piece_kind;
mod rank;
mod square;
mod zobrist;

pub use board::{Board, PrettyBoard};
pub use castling::CastlingRight;
pub use cell::Cell;
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, ParseSquareError};
pub use file::File;
pub use geometry::{
    BISHOP_DELTAS, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, KING_DELTAS, KNIGHT_DELTAS, ROOK_DELTAS,
    mailbox_index,
};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
pub use zobrist::{DEFAULT_ZOBRIST_SEED, ZobristKeys};
