use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coordinate outside of the 8x8 board
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error("square ({row}, {col}) is out of bounds")]
pub struct OutOfBounds {
    pub row: i32,
    pub col: i32,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("unexpected column char {0:?}")]
    UnexpectedColumn(char),
    #[error("unexpected row char {0:?}")]
    UnexpectedRow(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayerParseError {
    #[error("unexpected player char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Square on the board
///
/// Rows and columns are numbered from 0 to 7. Row 0 is the back rank of [`Player::White`],
/// row 7 is the back rank of [`Player::Black`]. Internally the square is stored as a dense
/// index `row * 8 + col`, so it is cheap to copy and compare.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    /// Validating constructor
    ///
    /// Coordinates are signed, so a negative row or column is reported instead of wrapping.
    pub fn new(row: i32, col: i32) -> Result<Square, OutOfBounds> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(OutOfBounds { row, col });
        }
        Ok(Square(((row as u8) << 3) | col as u8))
    }

    /// Builds a square from coordinates known to be valid
    ///
    /// Panics if `row` or `col` is not less than 8.
    pub const fn at(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "row and column must be between 0 and 7");
        Square((row << 3) | col)
    }

    pub const fn from_index(val: usize) -> Square {
        assert!(val < 64, "square index must be between 0 and 63");
        Square(val as u8)
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub const fn row(&self) -> u8 {
        self.0 >> 3
    }

    pub const fn col(&self) -> u8 {
        self.0 & 7
    }

    /// Returns the square shifted by `(d_row, d_col)`, or `None` if it leaves the board
    #[inline]
    pub fn try_shift(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = (self.row() as i8).checked_add(d_row)?;
        let col = (self.col() as i8).checked_add(d_col)?;
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        Some(Square(((row as u8) << 3) | col as u8))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Square({})", self);
        }
        write!(f, "Square(?{:?})", self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            (b'1' + self.row()) as char
        )
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(SquareParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            b => return Err(SquareParseError::UnexpectedColumn(b as char)),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => b - b'1',
            b => return Err(SquareParseError::UnexpectedRow(b as char)),
        };
        Ok(Square::at(row, col))
    }
}

/// Side controlling a piece
///
/// White moves first and advances towards increasing rows, Black moves second and advances
/// towards decreasing rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    pub const COUNT: usize = 2;

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const fn inv(&self) -> Player {
        match *self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'w' => Some(Player::White),
            'b' => Some(Player::Black),
            _ => None,
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Player::White, Player::Black].into_iter()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Player {
    type Err = PlayerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(PlayerParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Player::from_char(ch).ok_or(PlayerParseError::UnexpectedChar(ch))
    }
}

/// Movement archetype of a piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }

    /// Letter of the piece as used in FEN, uppercase for White
    pub fn as_char(&self, player: Player) -> char {
        let c = b"pnbrqk"[*self as usize] as char;
        match player {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }

    pub fn as_utf8_char(&self, player: Player) -> char {
        match player {
            Player::White => ['♙', '♘', '♗', '♖', '♕', '♔'][*self as usize],
            Player::Black => ['♟', '♞', '♝', '♜', '♛', '♚'][*self as usize],
        }
    }
}
