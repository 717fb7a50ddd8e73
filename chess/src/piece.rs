//! Pieces and their identity

use crate::bitboard::Bitboard;
use crate::board::{Board, BoardError};
use crate::movegen;
use crate::types::{PieceKind, Player, Square};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a piece instance
///
/// Every call to [`Piece::new()`] yields a fresh identity, so two pawns of the same player are
/// still distinct pieces. The board finds a piece by its identity, never by its kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u64);

impl PieceId {
    fn next() -> PieceId {
        PieceId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "#{}", self.0)
    }
}

/// Chess piece
///
/// A piece knows its player, its kind and its identity, but not its square. The square is always
/// derived from the board, so a piece cannot hold a stale location after the board changes.
///
/// # Example
///
/// ```
/// # use chesscore::{Board, Piece, Player, Square};
/// #
/// let mut board = Board::empty();
/// let rook = Piece::rook(Player::White);
/// board.place(Square::at(0, 0), rook);
///
/// let moves = rook.compute_moves(&board).unwrap();
/// assert_eq!(moves.len(), 14);
///
/// rook.move_to(&mut board, Square::at(5, 0)).unwrap();
/// assert_eq!(board.locate(&rook), Ok(Square::at(5, 0)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    player: Player,
    kind: PieceKind,
}

impl Piece {
    pub fn new(kind: PieceKind, player: Player) -> Piece {
        Piece {
            id: PieceId::next(),
            player,
            kind,
        }
    }

    pub fn pawn(player: Player) -> Piece {
        Piece::new(PieceKind::Pawn, player)
    }

    pub fn knight(player: Player) -> Piece {
        Piece::new(PieceKind::Knight, player)
    }

    pub fn bishop(player: Player) -> Piece {
        Piece::new(PieceKind::Bishop, player)
    }

    pub fn rook(player: Player) -> Piece {
        Piece::new(PieceKind::Rook, player)
    }

    pub fn queen(player: Player) -> Piece {
        Piece::new(PieceKind::Queen, player)
    }

    pub fn king(player: Player) -> Piece {
        Piece::new(PieceKind::King, player)
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn as_char(&self) -> char {
        self.kind.as_char(self.player)
    }

    /// Returns the squares this piece may move to
    ///
    /// The piece first locates itself on `board`, so the result always reflects its current
    /// square. Fails with [`BoardError::PieceNotFound`] if the piece is not on the board.
    ///
    /// Check, castling, en passant and promotion are not considered. Knights, queens and kings
    /// have no movement rules yet and always yield an empty set.
    #[inline]
    pub fn compute_moves(&self, board: &Board) -> Result<Bitboard, BoardError> {
        movegen::gen_moves(board, self)
    }

    /// Moves this piece to `dst` and returns the piece captured there, if any
    ///
    /// No legality check is done, `dst` is expected to come from [`Piece::compute_moves()`].
    pub fn move_to(&self, board: &mut Board, dst: Square) -> Result<Option<Piece>, BoardError> {
        let src = board.locate(self)?;
        board.relocate(src, dst)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.as_char(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let a = Piece::pawn(Player::White);
        let b = Piece::pawn(Player::White);
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.player(), b.player());

        let copy = a;
        assert_eq!(copy, a);
    }

    #[test]
    fn test_constructors() {
        let pieces = [
            (Piece::pawn(Player::Black), PieceKind::Pawn),
            (Piece::knight(Player::Black), PieceKind::Knight),
            (Piece::bishop(Player::Black), PieceKind::Bishop),
            (Piece::rook(Player::Black), PieceKind::Rook),
            (Piece::queen(Player::Black), PieceKind::Queen),
            (Piece::king(Player::Black), PieceKind::King),
        ];
        for (piece, kind) in pieces {
            assert_eq!(piece.kind(), kind);
            assert_eq!(piece.player(), Player::Black);
        }
    }

    #[test]
    fn test_display() {
        let p = Piece::queen(Player::White);
        assert_eq!(p.to_string(), format!("Q#{}", p.id().as_raw()));
        let p = Piece::knight(Player::Black);
        assert_eq!(p.to_string(), format!("n#{}", p.id().as_raw()));
    }

    #[test]
    fn test_not_placed() {
        let board = Board::empty();
        let rook = Piece::rook(Player::White);
        assert_eq!(
            rook.compute_moves(&board),
            Err(BoardError::PieceNotFound(rook.id()))
        );

        let mut board = Board::empty();
        assert_eq!(
            rook.move_to(&mut board, Square::at(3, 3)),
            Err(BoardError::PieceNotFound(rook.id()))
        );
        assert!(board.occupied().is_empty());
    }

    #[test]
    fn test_move_to() {
        let mut board = Board::empty();
        let pawn = Piece::pawn(Player::White);
        board.place(Square::at(1, 4), pawn);

        assert_eq!(pawn.move_to(&mut board, Square::at(2, 4)), Ok(None));
        assert_eq!(board.locate(&pawn), Ok(Square::at(2, 4)));
        assert_eq!(board.get(Square::at(1, 4)), None);
        assert_eq!(
            pawn.compute_moves(&board).unwrap(),
            Bitboard::from_square(Square::at(3, 4))
        );
    }

    #[test]
    fn test_move_to_captures() {
        let mut board = Board::empty();
        let bishop = Piece::bishop(Player::White);
        let victim = Piece::pawn(Player::Black);
        board.place(Square::at(3, 5), bishop);
        board.place(Square::at(5, 7), victim);

        assert_eq!(
            bishop.move_to(&mut board, Square::at(5, 7)),
            Ok(Some(victim))
        );
        assert_eq!(board.locate(&bishop), Ok(Square::at(5, 7)));
        assert_eq!(
            board.locate(&victim),
            Err(BoardError::PieceNotFound(victim.id()))
        );
        assert_eq!(
            victim.compute_moves(&board),
            Err(BoardError::PieceNotFound(victim.id()))
        );
    }
}
