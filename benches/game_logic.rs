use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minofall::core::{Board, Catalog, GameConfig, GameState, Mino};
use minofall::types::{GameAction, GameEvent, MinoColor, Offset};

fn bench_tick(c: &mut Criterion) {
    let state = GameState::new(GameConfig::default()).unwrap();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| black_box(state.clone()).step(GameEvent::Tick { elapsed_ms: 16 }))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let bar = Mino::from_rows(&[vec![true; 15]]).unwrap();
    let mut board = Board::new(15, 30).unwrap();
    // Fill bottom 4 rows
    for y in 26..30 {
        board = board.stamp(&bar, MinoColor::Blue, Offset::new(0, y)).unwrap();
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| black_box(&board).clear_complete_lines())
    });
}

fn bench_stamp(c: &mut Criterion) {
    let catalog = Catalog::tetrominoes();
    let board = Board::new(15, 30).unwrap();
    let (mino, color) = catalog.pick(5);

    c.bench_function("stamp_l", |b| {
        b.iter(|| board.stamp(black_box(mino), color, black_box(Offset::new(6, 20))))
    });
}

fn bench_can_place(c: &mut Criterion) {
    let catalog = Catalog::tetrominoes();
    let board = Board::new(15, 30).unwrap();
    let mino = catalog.get(6).unwrap();

    c.bench_function("can_place", |b| {
        b.iter(|| board.can_place(black_box(mino), black_box(Offset::new(3, 10))))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let state = GameState::new(GameConfig::default()).unwrap();

    c.bench_function("rotate_active", |b| {
        b.iter(|| black_box(state.clone()).step(GameAction::RotateCw.into()))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_stamp,
    bench_can_place,
    bench_rotate
);
criterion_main!(benches);
