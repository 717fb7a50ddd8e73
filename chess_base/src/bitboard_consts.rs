use crate::bitboard::Bitboard;
use crate::types::Square;

/// Diagonals indexed by `row + col`
const DIAG_SUM: [Bitboard; 15] = [
    Bitboard::from_raw(0x0000000000000001),
    Bitboard::from_raw(0x0000000000000102),
    Bitboard::from_raw(0x0000000000010204),
    Bitboard::from_raw(0x0000000001020408),
    Bitboard::from_raw(0x0000000102040810),
    Bitboard::from_raw(0x0000010204081020),
    Bitboard::from_raw(0x0001020408102040),
    Bitboard::from_raw(0x0102040810204080),
    Bitboard::from_raw(0x0204081020408000),
    Bitboard::from_raw(0x0408102040800000),
    Bitboard::from_raw(0x0810204080000000),
    Bitboard::from_raw(0x1020408000000000),
    Bitboard::from_raw(0x2040800000000000),
    Bitboard::from_raw(0x4080000000000000),
    Bitboard::from_raw(0x8000000000000000),
];

/// Diagonals indexed by `col - row + 7`
const DIAG_DIFF: [Bitboard; 15] = [
    Bitboard::from_raw(0x0100000000000000),
    Bitboard::from_raw(0x0201000000000000),
    Bitboard::from_raw(0x0402010000000000),
    Bitboard::from_raw(0x0804020100000000),
    Bitboard::from_raw(0x1008040201000000),
    Bitboard::from_raw(0x2010080402010000),
    Bitboard::from_raw(0x4020100804020100),
    Bitboard::from_raw(0x8040201008040201),
    Bitboard::from_raw(0x0080402010080402),
    Bitboard::from_raw(0x0000804020100804),
    Bitboard::from_raw(0x0000008040201008),
    Bitboard::from_raw(0x0000000080402010),
    Bitboard::from_raw(0x0000000000804020),
    Bitboard::from_raw(0x0000000000008040),
    Bitboard::from_raw(0x0000000000000080),
];

pub const fn row(r: u8) -> Bitboard {
    assert!(r < 8, "row must be between 0 and 7");
    Bitboard::from_raw(0xff_u64 << (r * 8))
}

pub const fn col(c: u8) -> Bitboard {
    assert!(c < 8, "column must be between 0 and 7");
    Bitboard::from_raw(0x0101010101010101_u64 << c)
}

pub const fn diag_sum(sq: Square) -> Bitboard {
    DIAG_SUM[(sq.row() + sq.col()) as usize]
}

pub const fn diag_diff(sq: Square) -> Bitboard {
    DIAG_DIFF[(sq.col() + 7 - sq.row()) as usize]
}

/// Squares a rook on `sq` reaches on an empty board
pub const fn rook_rays(sq: Square) -> Bitboard {
    let lines = row(sq.row()).as_raw() | col(sq.col()).as_raw();
    Bitboard::from_raw(lines & !(1_u64 << sq.index()))
}

/// Squares a bishop on `sq` reaches on an empty board
pub const fn bishop_rays(sq: Square) -> Bitboard {
    let lines = diag_sum(sq).as_raw() | diag_diff(sq).as_raw();
    Bitboard::from_raw(lines & !(1_u64 << sq.index()))
}

/// Strict interior of the segment between two squares on a common line, empty otherwise
pub fn between(a: Square, b: Square) -> Bitboard {
    let d_row = b.row() as i8 - a.row() as i8;
    let d_col = b.col() as i8 - a.col() as i8;
    if (d_row, d_col) == (0, 0) || (d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs()) {
        return Bitboard::EMPTY;
    }
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut res = Bitboard::EMPTY;
    let mut cur = a;
    while let Some(next) = cur.try_shift(step_row, step_col) {
        if next == b {
            break;
        }
        res.set(next);
        cur = next;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        for sq in Square::iter() {
            assert!(row(sq.row()).has(sq));
            assert!(col(sq.col()).has(sq));
            assert!(diag_sum(sq).has(sq));
            assert!(diag_diff(sq).has(sq));
        }
        for i in 0..8 {
            assert_eq!(row(i).len(), 8);
            assert_eq!(col(i).len(), 8);
        }
    }

    #[test]
    fn test_rays() {
        assert_eq!(rook_rays(Square::at(0, 0)).len(), 14);
        assert_eq!(rook_rays(Square::at(4, 3)).len(), 14);
        assert_eq!(bishop_rays(Square::at(0, 0)).len(), 7);
        assert_eq!(bishop_rays(Square::at(3, 3)).len(), 13);

        let expected: Bitboard = [
            (0, 2),
            (1, 3),
            (2, 4),
            (4, 6),
            (5, 7),
            (1, 7),
            (2, 6),
            (4, 4),
            (5, 3),
            (6, 2),
            (7, 1),
        ]
        .into_iter()
        .map(|(r, c)| Square::at(r, c))
        .collect();
        assert_eq!(bishop_rays(Square::at(3, 5)), expected);
    }

    #[test]
    fn test_between() {
        let b4 = Square::at(3, 1);
        let e7 = Square::at(6, 4);
        let res = Bitboard::EMPTY
            .with(Square::at(4, 2))
            .with(Square::at(5, 3));
        assert_eq!(between(b4, e7), res);
        assert_eq!(between(e7, b4), res);

        let d3 = Square::at(2, 3);
        let d6 = Square::at(5, 3);
        let res = Bitboard::EMPTY
            .with(Square::at(3, 3))
            .with(Square::at(4, 3));
        assert_eq!(between(d3, d6), res);
        assert_eq!(between(d6, d3), res);

        assert_eq!(between(d3, Square::at(2, 4)), Bitboard::EMPTY);
        assert_eq!(between(d3, d3), Bitboard::EMPTY);
        assert_eq!(between(Square::at(0, 0), Square::at(1, 2)), Bitboard::EMPTY);
    }
}
