//! Zobrist keys for position hashing.
//!
//! A position's hash is the XOR of one key per independent feature:
//! piece on square, side to move, en-passant square, and castling
//! rights. The keys are drawn from a seeded Mersenne Twister in a fixed
//! traversal order, so two implementations that share the seed produce
//! bit-identical tables and interoperable hashes.

use once_cell::sync::Lazy;

use crate::board::Board;
use crate::castling::CastlingRight;
use crate::color::Color;
use crate::file::File;
use crate::geometry::BOARD_SIZE;
use crate::mt19937::MersenneTwister;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Seed for the process-wide key set.
pub const DEFAULT_ZOBRIST_SEED: u32 = 3_141_592_654;

const TWO_POW_48: f64 = 281_474_976_710_656.0;

static SHARED: Lazy<ZobristKeys> = Lazy::new(|| ZobristKeys::generate(DEFAULT_ZOBRIST_SEED));

/// Scale one generator draw into the 48-bit key range.
///
/// The 0.75 factor deliberately restricts keys below the full range;
/// consumers rely on this exact distribution for reproducible test
/// vectors, so it must not be widened. Evaluation order matches the
/// reference stream (multiply by 0.75 first, then scale).
fn draw_key(mt: &mut MersenneTwister) -> u64 {
    ((mt.next_f64() * 0.75) * TWO_POW_48).floor() as u64
}

/// The full Zobrist key set: one key per (color, playable square, piece
/// kind), one en-passant key per playable square, four castling keys,
/// and one side-to-move key.
///
/// Generated once at startup and immutable thereafter; square tables are
/// indexed by mailbox index, with border slots left at zero.
#[derive(Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    squares: Box<[[[u64; PieceKind::COUNT]; BOARD_SIZE]; Color::COUNT]>,
    en_passant: Box<[u64; BOARD_SIZE]>,
    castling: [u64; CastlingRight::COUNT],
    turn: u64,
}

impl ZobristKeys {
    /// Generate the key set from a seed. Deterministic: the same seed
    /// yields a bit-identical table.
    ///
    /// Draw order is part of the cross-implementation contract: the
    /// side-to-move key first; then per square (rank 1..8 outer, file
    /// a..h inner) a key per color and piece kind followed by that
    /// square's en-passant key; finally the four castling keys.
    pub fn generate(seed: u32) -> ZobristKeys {
        let mut mt = MersenneTwister::new(seed);

        let turn = draw_key(&mut mt);
        let mut squares = Box::new([[[0u64; PieceKind::COUNT]; BOARD_SIZE]; Color::COUNT]);
        let mut en_passant = Box::new([0u64; BOARD_SIZE]);

        for rank in Rank::ALL {
            for file in File::ALL {
                let index = Square::new(file, rank).mailbox() as usize;
                for color in Color::ALL {
                    for kind in PieceKind::ALL {
                        squares[color.index()][index][kind.index()] = draw_key(&mut mt);
                    }
                }
                en_passant[index] = draw_key(&mut mt);
            }
        }

        let mut castling = [0u64; CastlingRight::COUNT];
        for right in CastlingRight::ALL {
            castling[right.index()] = draw_key(&mut mt);
        }

        tracing::debug!(seed, "generated zobrist key set");

        ZobristKeys {
            squares,
            en_passant,
            castling,
            turn,
        }
    }

    /// Return the process-wide key set, generated on first use from
    /// [`DEFAULT_ZOBRIST_SEED`].
    pub fn shared() -> &'static ZobristKeys {
        &SHARED
    }

    /// Key for a piece of the given color and kind on a square.
    #[inline]
    pub fn piece(&self, color: Color, square: Square, kind: PieceKind) -> u64 {
        self.squares[color.index()][square.mailbox() as usize][kind.index()]
    }

    /// Key for an en-passant target square.
    #[inline]
    pub fn en_passant(&self, square: Square) -> u64 {
        self.en_passant[square.mailbox() as usize]
    }

    /// Key for a castling right.
    #[inline]
    pub fn castling(&self, right: CastlingRight) -> u64 {
        self.castling[right.index()]
    }

    /// Key XORed in when Black is the side to move.
    #[inline]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Compute a position hash from scratch: piece-square keys plus the
    /// turn key when Black moves. The embedding engine maintains the
    /// same hash incrementally; this is the reference computation.
    pub fn hash(&self, board: &Board) -> u64 {
        let mut hash = 0u64;
        for square in Square::all() {
            if let Some(piece) = board.piece_at(square) {
                hash ^= self.piece(piece.color, square, piece.kind);
            }
        }
        if board.side_to_move() == Color::Black {
            hash ^= self.turn;
        }
        hash
    }
}
