//! Benchmarks for the tower puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tower_swap::solver::solve;
use tower_swap::{PuzzleState, TowerPuzzle};

/// Benchmark solving the three-disk puzzle.
fn bench_solve_3(c: &mut Criterion) {
    let puzzle = TowerPuzzle::new(3).unwrap();

    c.bench_function("solve_3_disks", |b| b.iter(|| solve(black_box(&puzzle))));
}

/// Benchmark solving the standard four-disk puzzle.
fn bench_solve_4(c: &mut Criterion) {
    let puzzle = TowerPuzzle::default();

    let mut group = c.benchmark_group("standard");
    group.sample_size(10);
    group.bench_function("solve_4_disks", |b| b.iter(|| solve(black_box(&puzzle))));
    group.finish();
}

/// Benchmark legal move generation on the starting board.
fn bench_legal_moves(c: &mut Criterion) {
    let puzzle = TowerPuzzle::default();

    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(&puzzle).legal_moves())
    });
}

/// Benchmark duplicating a board and applying one move.
fn bench_duplicate_and_move(c: &mut Criterion) {
    let puzzle = TowerPuzzle::default();
    let mv = *puzzle.legal_moves().iter().next().unwrap();

    c.bench_function("duplicate_and_move", |b| {
        b.iter(|| {
            let mut next = black_box(&puzzle).duplicate();
            next.make_move(&mv).unwrap();
            next
        })
    });
}

criterion_group!(
    benches,
    bench_solve_3,
    bench_solve_4,
    bench_legal_moves,
    bench_duplicate_and_move
);
criterion_main!(benches);
