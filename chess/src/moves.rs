//! Candidate moves

use crate::board::{Board, BoardError};
use crate::piece::Piece;
use crate::types::Square;

use std::fmt;

use arrayvec::ArrayVec;

/// Candidate move of a piece
///
/// A move only records which piece goes where. It is not checked against the rules when made, so
/// it should come from [`movegen::gen_all()`](crate::movegen::gen_all) or
/// [`Piece::compute_moves()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    src: Square,
    dst: Square,
}

impl Move {
    #[inline]
    pub const fn new(piece: Piece, src: Square, dst: Square) -> Move {
        Move { piece, src, dst }
    }

    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn src(&self) -> Square {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Square {
        self.dst
    }

    /// Returns `true` if the destination holds a piece of the opponent
    #[inline]
    pub fn is_capture(&self, b: &Board) -> bool {
        matches!(b.get(self.dst), Some(p) if p.player() != self.piece.player())
    }

    /// Moves the piece to the destination and returns the captured piece, if any
    ///
    /// The piece is located on the board again, so the move still applies if the piece was
    /// relocated since the move was generated.
    pub fn make(&self, b: &mut Board) -> Result<Option<Piece>, BoardError> {
        self.piece.move_to(b, self.dst)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

/// Sink for generated moves
pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl<const N: usize> MovePush for ArrayVec<Move, N> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}
