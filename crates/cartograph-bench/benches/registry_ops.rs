//! Criterion benchmarks for per-turn registry updates.

use std::hint::black_box;

use cartograph_bench::{arena_board, shift_agents, standard_charts};
use cartograph_core::AgentId;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: one turn of the standard chart set on a 28x28 board.
fn bench_update_standard_28(c: &mut Criterion) {
    let board = arena_board(28, 42);
    let boards: Vec<_> = (0..4).map(|t| shift_agents(&board, t)).collect();
    let mut charts = standard_charts(board, AgentId(1)).unwrap();
    let mut turn = 0usize;

    c.bench_function("update_standard_28", |b| {
        b.iter(|| {
            charts.update(boards[turn % boards.len()].clone()).unwrap();
            turn += 1;
            black_box(charts.turn());
        });
    });
}

/// Benchmark: one turn of the standard chart set on a 100x100 board.
fn bench_update_standard_100(c: &mut Criterion) {
    let board = arena_board(100, 42);
    let boards: Vec<_> = (0..4).map(|t| shift_agents(&board, t)).collect();
    let mut charts = standard_charts(board, AgentId(1)).unwrap();
    let mut turn = 0usize;

    c.bench_function("update_standard_100", |b| {
        b.iter(|| {
            charts.update(boards[turn % boards.len()].clone()).unwrap();
            turn += 1;
            black_box(charts.turn());
        });
    });
}

/// Benchmark: normalized sampling of a chained chart across the board.
fn bench_sample_normalized_28(c: &mut Criterion) {
    let board = arena_board(28, 42);
    let mut charts = standard_charts(board.clone(), AgentId(1)).unwrap();
    charts.update(board).unwrap();

    c.bench_function("sample_normalized_28", |b| {
        b.iter(|| {
            let mut total = 0.0f32;
            for y in 0..28 {
                for x in 0..28 {
                    total += charts.sample_normalized(x, y, "mines", 10.0).unwrap();
                }
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_update_standard_28,
    bench_update_standard_100,
    bench_sample_normalized_28
);
criterion_main!(benches);
