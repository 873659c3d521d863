use criterion::{black_box, criterion_group, criterion_main, Criterion};
use megatetris::core::{Board, GameConfig, Session, Tetromino};
use megatetris::types::{HeldKeys, InputEvent, PieceKind, Point, TickInput};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(GameConfig::default(), ());
    let idle = TickInput::default();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = Session::new(GameConfig::default(), ());
            }
            session.tick(black_box(&idle));
        })
    });
}

fn bench_soft_drop_tick(c: &mut Criterion) {
    let mut session = Session::new(GameConfig::default(), ());
    let input = TickInput::held(HeldKeys {
        down: true,
        ..HeldKeys::default()
    });

    c.bench_function("session_tick_soft_drop", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = Session::new(GameConfig::default(), ());
            }
            session.tick(black_box(&input));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            let cells: Vec<Point> = (16..20)
                .flat_map(|y| (0..10).map(move |x| Point::new(x, y)))
                .collect();
            board.lock_cells(&cells);
            board.clear_full_rows()
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new(10, 20);

    c.bench_function("rotate_t", |b| {
        b.iter(|| {
            let mut piece = Tetromino::at(PieceKind::T, Point::new(5, 10));
            for _ in 0..4 {
                piece.rotate(black_box(&board));
            }
            piece
        })
    });
}

fn bench_rotate_event(c: &mut Criterion) {
    let mut session = Session::new(GameConfig::default(), ());
    let input = TickInput::event(InputEvent::Rotate);

    c.bench_function("session_step_rotate", |b| {
        b.iter(|| session.step(black_box(&input)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_soft_drop_tick,
    bench_line_clear,
    bench_rotate,
    bench_rotate_event
);
criterion_main!(benches);
