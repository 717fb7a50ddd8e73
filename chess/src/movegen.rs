//! Candidate move generation
//!
//! Moves are generated from the current board only: there is no turn order, no check detection,
//! and no castling, en passant or promotion.

use crate::bitboard::Bitboard;
use crate::board::{Board, BoardError};
use crate::moves::{Move, MovePush};
use crate::piece::Piece;
use crate::types::{PieceKind, Player, Square};
use crate::{generic, geometry};

use log::trace;

/// Casts rays from `src` in each of `directions`
///
/// A ray covers empty squares until the board edge or the first occupied square. The occupied
/// square is included only if it belongs to the opponent of `player`.
///
/// Every direction must be non-zero.
pub fn slide(b: &Board, src: Square, player: Player, directions: &[(i8, i8)]) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    for &(d_row, d_col) in directions {
        debug_assert!((d_row, d_col) != (0, 0), "zero direction in ray walk");
        if (d_row, d_col) == (0, 0) {
            continue;
        }
        let mut cur = src;
        while let Some(next) = cur.try_shift(d_row, d_col) {
            if let Some(p) = b.get(next) {
                if p.player() != player {
                    res.set(next);
                }
                break;
            }
            res.set(next);
            cur = next;
        }
    }
    res
}

fn do_pawn<C: generic::Side>(b: &Board, src: Square) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    if src.row() == C::LAST_ROW {
        return res;
    }

    // Pushes. Any piece right in front blocks both of them.
    if let Some(one) = src.try_shift(C::FORWARD, 0) {
        if b.get(one).is_none() {
            res.set(one);
            if src.row() == C::PAWN_HOME_ROW {
                if let Some(two) = one.try_shift(C::FORWARD, 0) {
                    if b.get(two).is_none() {
                        res.set(two);
                    }
                }
            }
        }
    }

    // Captures
    for d_col in [-1, 1] {
        if let Some(dst) = src.try_shift(C::FORWARD, d_col) {
            if matches!(b.get(dst), Some(p) if p.player() == <C::Inv as generic::Side>::PLAYER) {
                res.set(dst);
            }
        }
    }

    res
}

/// Returns the squares a pawn of `player` standing on `src` may move to
///
/// The double push is allowed only from the pawn's home row, whatever way the pawn got there.
pub fn pawn(b: &Board, src: Square, player: Player) -> Bitboard {
    match player {
        Player::White => do_pawn::<generic::White>(b, src),
        Player::Black => do_pawn::<generic::Black>(b, src),
    }
}

fn moves_from(b: &Board, src: Square, piece: &Piece) -> Bitboard {
    let player = piece.player();
    match piece.kind() {
        PieceKind::Pawn => pawn(b, src, player),
        PieceKind::Rook => slide(b, src, player, &geometry::ORTHOGONAL),
        PieceKind::Bishop => slide(b, src, player, &geometry::DIAGONAL),
        // TODO: jumps for the knight, rook and bishop rays for the queen, single steps for the king
        PieceKind::Knight | PieceKind::Queen | PieceKind::King => Bitboard::EMPTY,
    }
}

/// Returns the squares `piece` may move to from its current square
///
/// Fails with [`BoardError::PieceNotFound`] if `piece` is not on the board.
pub fn gen_moves(b: &Board, piece: &Piece) -> Result<Bitboard, BoardError> {
    let src = b.locate(piece)?;
    let res = moves_from(b, src, piece);
    trace!("{} on {}: {} candidate moves", piece, src, res.len());
    Ok(res)
}

/// Pushes candidate moves of every piece of `player` into `dst`, ordered by source square
pub fn gen_all_into<P: MovePush>(b: &Board, player: Player, dst: &mut P) {
    for src in b.color(player) {
        if let Some(piece) = b.get(src) {
            for to in moves_from(b, src, &piece) {
                dst.push(Move::new(piece, src, to));
            }
        }
    }
}

/// Returns candidate moves of every piece of `player`
pub fn gen_all(b: &Board, player: Player) -> Vec<Move> {
    let mut res = Vec::new();
    gen_all_into(b, player, &mut res);
    res
}
