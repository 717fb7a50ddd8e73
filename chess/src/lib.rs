//! # chesscore
//!
//! Board storage and candidate move generation for a two-player chess engine.
//!
//! The [`Board`] stores which [`Piece`] stands on which [`Square`]. Each piece can compute the
//! set of squares it may move to with [`Piece::compute_moves()`], and can be moved with
//! [`Piece::move_to()`]. Move sets are returned as a [`Bitboard`].
//!
//! Only movement rules are considered. Check, castling, en passant and promotion are not
//! implemented, and knights, queens and kings have no moves yet.
//!
//! # Features
//!
//! - `selftest`: checks the board for consistency after every mutation and panics if it is
//!   broken. Run `cargo test --features selftest` to enable it in tests.
//!
//! # Example
//!
//! ```
//! use chesscore::{Bitboard, Board, Piece, Player, Square};
//!
//! let mut board = Board::empty();
//! let pawn = Piece::pawn(Player::White);
//! let enemy = Piece::rook(Player::Black);
//! board.place(Square::at(1, 4), pawn);
//! board.place(Square::at(2, 5), enemy);
//!
//! let moves = pawn.compute_moves(&board).unwrap();
//! let expected = [Square::at(2, 4), Square::at(3, 4), Square::at(2, 5)];
//! assert_eq!(moves, expected.into_iter().collect::<Bitboard>());
//!
//! let captured = pawn.move_to(&mut board, Square::at(2, 5)).unwrap();
//! assert_eq!(captured, Some(enemy));
//! ```

pub mod board;
pub mod movegen;
pub mod moves;
pub mod piece;

mod generic;

pub use chesscore_base::{bitboard, bitboard_consts, geometry, types};

pub use bitboard::Bitboard;
pub use board::{Board, BoardError};
pub use moves::{Move, MovePush};
pub use piece::{Piece, PieceId};
pub use types::{OutOfBounds, PieceKind, Player, Square};
