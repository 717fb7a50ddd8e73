use crate::geometry;
use crate::types;

pub trait Side {
    const PLAYER: types::Player;
    const FORWARD: i8;
    const PAWN_HOME_ROW: u8;
    const LAST_ROW: u8;
    type Inv: Side;
}

pub struct White;
pub struct Black;

impl Side for White {
    const PLAYER: types::Player = types::Player::White;
    const FORWARD: i8 = geometry::forward_delta(types::Player::White);
    const PAWN_HOME_ROW: u8 = geometry::pawn_home_row(types::Player::White);
    const LAST_ROW: u8 = geometry::last_row(types::Player::White);
    type Inv = Black;
}

impl Side for Black {
    const PLAYER: types::Player = types::Player::Black;
    const FORWARD: i8 = geometry::forward_delta(types::Player::Black);
    const PAWN_HOME_ROW: u8 = geometry::pawn_home_row(types::Player::Black);
    const LAST_ROW: u8 = geometry::last_row(types::Player::Black);
    type Inv = White;
}
