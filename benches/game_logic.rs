use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_2048::core::{compress_and_merge, Board, GameState, SimpleRng};
use tui_2048::types::Direction;

fn bench_compress_and_merge(c: &mut Criterion) {
    c.bench_function("compress_and_merge", |b| {
        b.iter(|| {
            let mut line = black_box([2u32, 2, 4, 4]);
            compress_and_merge(&mut line)
        })
    });
}

fn bench_slide(c: &mut Criterion) {
    let state = GameState::new(4, 12345).unwrap();

    c.bench_function("slide_left", |b| {
        b.iter_batched(
            || state.clone(),
            |mut s| s.slide(black_box(Direction::Left)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_spawn_tile(c: &mut Criterion) {
    let state = GameState::new(4, 12345).unwrap();

    c.bench_function("spawn_tile", |b| {
        b.iter_batched(
            || state.clone(),
            |mut s| s.spawn_tile(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_game_over_scan(c: &mut Criterion) {
    // Full board with no mergeable pair: the scan has to look at everything.
    let board = Board::from_rows(&[
        &[2, 4, 8, 16],
        &[32, 64, 128, 256],
        &[2, 4, 8, 16],
        &[32, 64, 128, 256],
    ]);
    let state = GameState::with_board(board, SimpleRng::new(1)).unwrap();

    c.bench_function("check_game_over_full_board", |b| {
        b.iter(|| black_box(&state).check_game_over())
    });
}

criterion_group!(
    benches,
    bench_compress_and_merge,
    bench_slide,
    bench_spawn_tile,
    bench_game_over_scan
);
criterion_main!(benches);
