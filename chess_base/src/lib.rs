//! # Base types for chesscore
//!
//! This is an auxiliary crate for `chesscore` holding the plain value types: squares, players,
//! piece kinds and square sets.
//!
//! Normally you don't want to use this crate directly. Use `chesscore` instead, which re-exports
//! everything from here.

pub mod bitboard;
pub mod bitboard_consts;
pub mod geometry;
pub mod types;
