//! Static Exchange Evaluation (SEE).
//!
//! Estimates the net material outcome of the full capture sequence on a
//! move's destination square, assuming each side always recaptures with
//! its least valuable available attacker. Search uses the score to order
//! and prune candidate captures without running the exchange itself.

use padbox_core::{
    BISHOP_DELTAS, Board, Color, KING_DELTAS, KNIGHT_DELTAS, Move, PieceKind, ROOK_DELTAS,
};

/// Material values for exchange evaluation, indexed by
/// [`PieceKind::index`].
pub const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 50];

/// Ray step for a given absolute mailbox-index difference from the
/// destination, or 0 when the difference lies on no rank, file, or
/// diagonal. A difference below 8 can only be a rank; beyond that,
/// divisibility by 14, 15, or 16 identifies the line (checked in that
/// order). 112 is the largest playable difference (a1 to h8).
const DELTA_BY_DIFFERENCE: [i16; 113] = {
    let mut table = [0i16; 113];
    let mut diff = 1;
    while diff < 113 {
        table[diff] = if diff < 8 {
            1
        } else if diff % 14 == 0 {
            14
        } else if diff % 15 == 0 {
            15
        } else if diff % 16 == 0 {
            16
        } else {
            0
        };
        diff += 1;
    }
    table
};

/// The slider kind that moves along a given ray step.
const fn slider_for_delta(delta: i16) -> PieceKind {
    match delta {
        14 | 16 => PieceKind::Bishop,
        _ => PieceKind::Rook, // 1 and 15
    }
}

#[inline]
const fn value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

#[inline]
fn value_at(board: &Board, index: i16) -> i32 {
    match board.cell(index).piece() {
        Some(piece) => value(piece.kind),
        None => 0,
    }
}

/// Evaluate the material outcome of the capture exchange started by
/// `mv`, from the moving side's perspective.
///
/// Precondition: `mv` is a pseudo-legal capture on `board`. A move with
/// no captured piece returns 0 immediately; other malformed input yields
/// an unspecified numeric result but never panics.
///
/// The result is clamped to zero: a losing exchange reports 0, not how
/// badly it loses.
pub fn static_exchange_evaluation(board: &Board, mv: Move) -> i32 {
    let Some(captured) = mv.captured() else {
        return 0;
    };

    let to = mv.dest();
    let from = mv.origin();

    // Attacker squares per color, in scan insertion order. The moving
    // piece is excluded everywhere: it is in flight and handled as the
    // first capturer below.
    let mut attackers: [Vec<i16>; 2] = [Vec::new(), Vec::new()];

    // Pawns attack the destination from the two diagonals one rank
    // behind it, relative to each color's forward direction.
    for color in Color::ALL {
        let forward = if color == Color::White { -1 } else { 1 };
        for step in [14i16, 16] {
            let probe = to + step * forward;
            if probe == from {
                continue;
            }
            if let Some(piece) = board.cell(probe).piece() {
                if piece.color == color && piece.kind == PieceKind::Pawn {
                    attackers[color.index()].push(probe);
                }
            }
        }
    }

    // Jump pieces.
    let jump_sets: [(&[i16], PieceKind); 2] = [
        (&KNIGHT_DELTAS, PieceKind::Knight),
        (&KING_DELTAS, PieceKind::King),
    ];
    for (deltas, kind) in jump_sets {
        for &delta in deltas {
            let probe = to + delta;
            if probe == from {
                continue;
            }
            if let Some(piece) = board.cell(probe).piece() {
                if piece.kind == kind {
                    attackers[piece.color.index()].push(probe);
                }
            }
        }
    }

    // Sliding pieces: first blocker on each ray, matching the ray's
    // kind or a queen. Queens are collected on both ray sets.
    let ray_sets: [(&[i16], PieceKind); 2] = [
        (&ROOK_DELTAS, PieceKind::Rook),
        (&BISHOP_DELTAS, PieceKind::Bishop),
    ];
    for (deltas, kind) in ray_sets {
        for &delta in deltas {
            let mut probe = to + delta;
            while board.cell(probe).is_empty() {
                probe += delta;
            }
            if probe == from {
                continue;
            }
            if let Some(piece) = board.cell(probe).piece() {
                if piece.kind == kind || piece.kind == PieceKind::Queen {
                    attackers[piece.color.index()].push(probe);
                }
            }
        }
    }

    let mut score = value(captured);
    let mut side = board.side_to_move().flip();
    let mut sign = -1;
    let mut used = [0usize; 2];

    // The candidate move's piece opens the exchange.
    let mut capturer_index = from;
    let mut capturer_value = value_at(board, from);

    while attackers[side.index()].len() > used[side.index()] {
        score += sign * capturer_value;

        // A capturer that stood on a line through the destination may
        // have shielded a slider behind it; continue that line past the
        // vacated square and collect a newly revealed attacker.
        let diff = (to - capturer_index).unsigned_abs() as usize;
        let hidden_delta = if diff < DELTA_BY_DIFFERENCE.len() {
            DELTA_BY_DIFFERENCE[diff]
        } else {
            0
        };
        if hidden_delta != 0 {
            let slider = slider_for_delta(hidden_delta);
            let step = if to < capturer_index {
                hidden_delta
            } else {
                -hidden_delta
            };
            let mut probe = capturer_index + step;
            while board.cell(probe).is_empty() {
                probe += step;
            }
            if let Some(piece) = board.cell(probe).piece() {
                if piece.kind == slider || piece.kind == PieceKind::Queen {
                    attackers[piece.color.index()].push(probe);
                }
            }
        }

        // Partial selection sort: swap the least-valued unused attacker
        // into the next-to-use slot. Revealed sliders keep growing the
        // collection, so a full sort up front would go stale.
        let list = &mut attackers[side.index()];
        let next = used[side.index()];
        let mut lowest = next;
        let mut lowest_value = value_at(board, list[next]);
        for j in next + 1..list.len() {
            let candidate = value_at(board, list[j]);
            if candidate < lowest_value {
                lowest = j;
                lowest_value = candidate;
            }
        }
        list.swap(next, lowest);

        capturer_index = list[next];
        capturer_value = lowest_value;
        used[side.index()] += 1;

        side = side.flip();
        sign = -sign;
    }

    score.max(0)
}

#[cfg(test)]
mod tests {
    use super::{PIECE_VALUES, static_exchange_evaluation};
    use padbox_core::{Board, Color, Move, Piece, PieceKind, Square};

    fn board_with(side: Color, pieces: &[(&str, char)]) -> Board {
        let mut board = Board::empty();
        for &(name, fen) in pieces {
            let square: Square = name.parse().unwrap();
            board.place(square, Piece::from_fen_char(fen).unwrap());
        }
        board.set_side_to_move(side);
        board
    }

    fn capture(from: &str, to: &str, victim: PieceKind) -> Move {
        Move::new_capture(from.parse().unwrap(), to.parse().unwrap(), victim)
    }

    #[test]
    fn value_table_order() {
        assert_eq!(PIECE_VALUES[PieceKind::Pawn.index()], 1);
        assert_eq!(PIECE_VALUES[PieceKind::Knight.index()], 3);
        assert_eq!(PIECE_VALUES[PieceKind::Bishop.index()], 3);
        assert_eq!(PIECE_VALUES[PieceKind::Rook.index()], 5);
        assert_eq!(PIECE_VALUES[PieceKind::Queen.index()], 9);
        assert_eq!(PIECE_VALUES[PieceKind::King.index()], 50);
    }

    #[test]
    fn non_capture_returns_zero() {
        let board = board_with(Color::White, &[("a1", 'R'), ("a5", 'p')]);
        let quiet = Move::new(Square::A1, Square::A4);
        assert_eq!(static_exchange_evaluation(&board, quiet), 0);
    }

    #[test]
    fn undefended_capture_wins_the_victim() {
        // Rook takes a pawn nobody defends.
        let board = board_with(Color::White, &[("a1", 'R'), ("a5", 'p')]);
        let mv = capture("a1", "a5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 1);
    }

    #[test]
    fn losing_exchange_clamps_to_zero() {
        // Knight takes a pawn defended by a rook: 1 - 3 = -2, clamped.
        let board = board_with(Color::White, &[("c3", 'N'), ("d5", 'p'), ("d8", 'r')]);
        let mv = capture("c3", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 0);
    }

    #[test]
    fn equal_pawn_trade_settles_at_zero() {
        // Pawn takes pawn, recaptured by one pawn: 1 - 1 = 0.
        let board = board_with(Color::White, &[("e4", 'P'), ("d5", 'p'), ("c6", 'p')]);
        let mv = capture("e4", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 0);
    }

    #[test]
    fn bishop_revealed_behind_the_capturing_pawn() {
        // The pawn capture uncovers the bishop on f3; after the pawn is
        // recaptured the bishop takes back, keeping the pawn win.
        let board = board_with(
            Color::White,
            &[("e4", 'P'), ("f3", 'B'), ("d5", 'p'), ("c6", 'p')],
        );
        let mv = capture("e4", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 1);

        // Without the bishop the exchange ends one capture earlier.
        let bare = board_with(Color::White, &[("e4", 'P'), ("d5", 'p'), ("c6", 'p')]);
        assert_eq!(static_exchange_evaluation(&bare, mv), 0);
    }

    #[test]
    fn rook_revealed_behind_the_capturing_rook() {
        // Doubled rooks against a pawn defended by one rook: the front
        // rook captures, trades, and the back rook is discovered.
        let board = board_with(
            Color::White,
            &[("d3", 'R'), ("d1", 'R'), ("d5", 'p'), ("d8", 'r')],
        );
        let mv = capture("d3", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 1);
    }

    #[test]
    fn queen_counts_as_rook_line_defender() {
        // The defending queen sits on a rook ray; the "or queen" arm of
        // the slider match must find it.
        let board = board_with(Color::White, &[("c3", 'N'), ("d5", 'p'), ("d8", 'q')]);
        let mv = capture("c3", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 0);
    }

    #[test]
    fn queen_counts_as_bishop_line_defender() {
        let board = board_with(Color::White, &[("c3", 'N'), ("d5", 'p'), ("b7", 'q')]);
        let mv = capture("c3", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 0);
    }

    #[test]
    fn king_recaptures() {
        // Queen grabs a pawn next to the enemy king: 1 - 9, clamped.
        let board = board_with(Color::White, &[("h5", 'Q'), ("f7", 'p'), ("e8", 'k')]);
        let mv = capture("h5", "f7", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 0);
    }

    #[test]
    fn black_to_move_uses_blacks_pawn_directions() {
        // Black pawn captures toward White's side; the White pawn on c4
        // defends d5 from one rank below.
        let board = board_with(Color::Black, &[("e6", 'p'), ("d5", 'P'), ("c4", 'P')]);
        let mv = capture("e6", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 0);

        let undefended = board_with(Color::Black, &[("e6", 'p'), ("d5", 'P')]);
        assert_eq!(static_exchange_evaluation(&undefended, mv), 1);
    }

    #[test]
    fn blocked_slider_is_not_an_attacker() {
        // The rook on d8 is shielded from d5 by its own knight on d6,
        // and a knight on d6 does not attack d5 itself: no recapture.
        let board = board_with(
            Color::White,
            &[("c3", 'N'), ("d5", 'p'), ("d6", 'n'), ("d8", 'r')],
        );
        let mv = capture("c3", "d5", PieceKind::Pawn);
        assert_eq!(static_exchange_evaluation(&board, mv), 1);
    }
}
