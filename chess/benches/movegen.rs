use chesscore::{movegen, Board, Piece, PieceKind, Player, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn initial() -> Board {
    Board::initial()
}

fn open_sliders() -> Board {
    let mut b = Board::empty();
    for (kind, player, row, col) in [
        (PieceKind::Rook, Player::White, 0, 0),
        (PieceKind::Rook, Player::White, 3, 4),
        (PieceKind::Bishop, Player::White, 2, 2),
        (PieceKind::Bishop, Player::White, 5, 1),
        (PieceKind::Rook, Player::Black, 7, 7),
        (PieceKind::Bishop, Player::Black, 6, 5),
        (PieceKind::Pawn, Player::Black, 4, 6),
        (PieceKind::Pawn, Player::White, 1, 3),
    ] {
        b.place(Square::at(row, col), Piece::new(kind, player));
    }
    b
}

fn crowded() -> Board {
    let mut b = Board::empty();
    for sq in Square::iter() {
        let player = if (sq.row() + sq.col()) % 2 == 0 {
            Player::White
        } else {
            Player::Black
        };
        let kind = match sq.index() % 3 {
            0 => PieceKind::Rook,
            1 => PieceKind::Bishop,
            _ => PieceKind::Pawn,
        };
        if sq.index() % 5 != 0 {
            b.place(sq, Piece::new(kind, player));
        }
    }
    b
}

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    [
        ("initial", initial()),
        ("open_sliders", open_sliders()),
        ("crowded", crowded()),
    ]
    .into_iter()
}

fn bench_gen_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_all");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(movegen::gen_all(&board, Player::White).len()))
        });
    }
}

fn bench_compute_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_moves");
    for (name, board) in boards() {
        let pieces = board.pieces();
        group.bench_function(name, |b| {
            b.iter(|| {
                for (_, piece) in &pieces {
                    black_box(piece.compute_moves(&board).map(|m| m.len()).unwrap_or(0));
                }
            })
        });
    }
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    for (name, board) in boards() {
        let pieces = board.pieces();
        group.bench_function(name, |b| {
            b.iter(|| {
                for (_, piece) in &pieces {
                    black_box(board.locate(piece).ok());
                }
            })
        });
    }
}

criterion_group!(
    movegen_benches,
    bench_gen_all,
    bench_compute_moves,
    bench_locate
);

criterion_main!(movegen_benches);
