//! Board and related things

use crate::bitboard::Bitboard;
use crate::geometry;
use crate::piece::{Piece, PieceId};
use crate::types::{OutOfBounds, PieceKind, Player, Square};

use std::fmt::{self, Display};
use std::mem;

use arrayvec::ArrayVec;
use log::{debug, trace};
use thiserror::Error;

/// Error raised by board operations
///
/// All of these indicate that the caller broke the board contract. They are never produced during
/// normal play.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum BoardError {
    /// Coordinates outside of the board were queried
    #[error("{0}")]
    OutOfBounds(#[from] OutOfBounds),
    /// Piece is not present on the board
    ///
    /// Either it was never placed, or it was overwritten by another piece.
    #[error("piece {0} is not on the board")]
    PieceNotFound(PieceId),
    /// Relocation from an empty square
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),
}

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess board
///
/// The board is a passive store mapping each square to an optional piece. Besides the cells, it
/// keeps an occupancy bitboard per player, which is updated on every mutation.
///
/// A piece is found on the board by its identity (see [`PieceId`]). At most one square holds any
/// given piece at a time.
///
/// The board does no internal locking. Sharing one board between threads requires external
/// synchronization, e.g. a `Mutex` owned by the caller.
///
/// # Example
///
/// ```
/// # use chesscore::{Board, Piece, Player, Square};
/// #
/// let mut board = Board::empty();
/// let pawn = Piece::pawn(Player::White);
/// board.place(Square::at(1, 4), pawn);
///
/// assert_eq!(board.get(Square::at(1, 4)), Some(pawn));
/// assert_eq!(board.locate(&pawn), Ok(Square::at(1, 4)));
///
/// board.relocate(Square::at(1, 4), Square::at(3, 4)).unwrap();
/// assert_eq!(board.get(Square::at(1, 4)), None);
/// assert_eq!(board.locate(&pawn), Ok(Square::at(3, 4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
    occupied: [Bitboard; Player::COUNT],
}

impl Board {
    /// Returns an empty board
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
            occupied: [Bitboard::EMPTY; Player::COUNT],
        }
    }

    /// Returns a board with the initial position
    ///
    /// Each call creates new pieces, so two initial boards never share piece identities.
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for player in Player::iter() {
            let back = geometry::back_row(player);
            let pawns = geometry::pawn_home_row(player);
            for (col, kind) in BACK_ROW.iter().enumerate() {
                let col = col as u8;
                res.place(Square::at(back, col), Piece::new(*kind, player));
                res.place(Square::at(pawns, col), Piece::pawn(player));
            }
        }
        res
    }

    /// Returns the piece on square `sq`, if any
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Returns the piece on square with row `row` and column `col`, if any
    ///
    /// Unlike [`Board::get()`], the coordinates are not validated beforehand, so this fails with
    /// [`BoardError::OutOfBounds`] if they are outside of the board.
    #[inline]
    pub fn get2(&self, row: i32, col: i32) -> Result<Option<Piece>, BoardError> {
        Ok(self.get(Square::new(row, col)?))
    }

    /// Returns the square holding `piece`
    ///
    /// The board is scanned on every call, so the result always reflects the latest placement.
    pub fn locate(&self, piece: &Piece) -> Result<Square, BoardError> {
        self.find(piece.id()).ok_or_else(|| {
            trace!("piece {} is not on the board", piece);
            BoardError::PieceNotFound(piece.id())
        })
    }

    /// Puts `piece` on square `sq` and returns the piece that was overwritten there
    ///
    /// This is a raw write: no movement rules are checked. Overwriting an occupied square is how
    /// capture happens, the returned piece can no longer be located on the board.
    ///
    /// If `piece` already stands on another square, that square is cleared first, so the piece is
    /// never present on the board twice.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        if let Some(old) = self.find(piece.id()) {
            if old == sq {
                return None;
            }
            self.put(old, None);
        }
        let captured = self.put(sq, Some(piece));
        if let Some(victim) = captured {
            debug!("{} on {} overwrites {}", piece, sq, victim);
        }
        self.selftest();
        captured
    }

    /// Clears square `sq` and returns the piece that stood there
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        let res = self.put(sq, None);
        self.selftest();
        res
    }

    /// Moves the piece from `src` to `dst` and returns the piece captured on `dst`, if any
    ///
    /// Fails with [`BoardError::EmptyOrigin`] if there is no piece on `src`.
    pub fn relocate(&mut self, src: Square, dst: Square) -> Result<Option<Piece>, BoardError> {
        let piece = self.take(src).ok_or(BoardError::EmptyOrigin(src))?;
        Ok(self.place(dst, piece))
    }

    /// Returns the bitboard over all occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied[Player::White.index()] | self.occupied[Player::Black.index()]
    }

    /// Returns the bitboard over all the squares occupied by `p`
    ///
    /// This function is quite fast, as it doesn't compute anything and just returns the
    /// stored value.
    #[inline]
    pub fn color(&self, p: Player) -> Bitboard {
        self.occupied[p.index()]
    }

    /// Returns all the pieces on the board, ordered by square index
    pub fn pieces(&self) -> ArrayVec<(Square, Piece), { Square::COUNT }> {
        self.occupied()
            .into_iter()
            .filter_map(|sq| self.get(sq).map(|p| (sq, p)))
            .collect()
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use chesscore::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    fn find(&self, id: PieceId) -> Option<Square> {
        self.cells
            .iter()
            .position(|cell| matches!(cell, Some(p) if p.id() == id))
            .map(Square::from_index)
    }

    fn put(&mut self, sq: Square, cell: Option<Piece>) -> Option<Piece> {
        let prev = mem::replace(&mut self.cells[sq.index()], cell);
        if let Some(p) = prev {
            self.occupied[p.player().index()].unset(sq);
        }
        if let Some(p) = cell {
            self.occupied[p.player().index()].set(sq);
        }
        prev
    }

    #[inline]
    fn selftest(&self) {
        #[cfg(feature = "selftest")]
        self.validate();
    }

    #[cfg(feature = "selftest")]
    fn validate(&self) {
        let mut occupied = [Bitboard::EMPTY; Player::COUNT];
        let mut seen = ArrayVec::<PieceId, { Square::COUNT }>::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            if let Some(p) = cell {
                assert!(!seen.contains(&p.id()), "piece {} is placed twice", p);
                seen.push(p.id());
                occupied[p.player().index()].set(Square::from_index(idx));
            }
        }
        assert_eq!(
            occupied, self.occupied,
            "occupancy is out of sync with cells"
        );
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(c: Option<Piece>) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (0..8).rev() {
            write!(f, "{}{}", row + 1, Self::VERT_FRAME)?;
            for col in 0..8 {
                write!(f, "{}", Self::cell(b.get(Square::at(row, col))))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in 0..8 {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for col in 0..8 {
            write!(f, "{}", (b'a' + col) as char)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(c: Option<Piece>) -> char {
        c.map_or('.', |p| p.as_char())
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(c: Option<Piece>) -> char {
        c.map_or('.', |p| p.kind().as_utf8_char(p.player()))
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
