use crate::types::Player;

/// Unit steps along rows and columns, as `(d_row, d_col)`
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Unit steps along the diagonals, as `(d_row, d_col)`
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const fn forward_delta(p: Player) -> i8 {
    match p {
        Player::White => 1,
        Player::Black => -1,
    }
}

/// Row on which pieces of `p` are lined up initially
pub const fn back_row(p: Player) -> u8 {
    match p {
        Player::White => 0,
        Player::Black => 7,
    }
}

/// Row from which a pawn may advance two squares
pub const fn pawn_home_row(p: Player) -> u8 {
    match p {
        Player::White => 1,
        Player::Black => 6,
    }
}

/// Farthest row in the forward direction of `p`
pub const fn last_row(p: Player) -> u8 {
    back_row(p.inv())
}
