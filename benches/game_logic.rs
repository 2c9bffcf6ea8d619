use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, GameState};
use tui_blockfall::types::{KeyState, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut now_ms = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now_ms += 16;
            let keys = KeyState {
                down: true,
                restart: state.is_game_over(),
                ..KeyState::default()
            };
            state.tick(black_box(now_ms), keys);
            // The driver drains once per frame; do the same so the queue stays bounded.
            black_box(state.drain_events().count());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, PieceKind::I, None);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(state.spawn_next_piece());
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_move_horizontal(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut delta = 1;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !state.move_horizontal(black_box(delta)) {
                delta = -delta;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move_horizontal,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
