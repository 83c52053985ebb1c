//! Criterion micro-benchmarks for push, scope rollback, and clear.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loam_bench::{churn, page_arena, slab_arena};

/// Benchmark: 1024 small pushes into a persistent arena, reclaimed by a
/// scope per iteration so the arena never grows across samples.
fn bench_push_64b(c: &mut Criterion) {
    let mut arena = slab_arena();
    c.bench_function("arena_push_64b_x1024", |b| {
        b.iter(|| {
            let mark = arena.scope_start();
            churn(&mut arena, 1024, 64);
            black_box(arena.used_bytes());
            arena.scope_end(mark);
        });
    });
}

/// Benchmark: scope open/close round-trip with a block-spanning workload.
fn bench_scope_rollback(c: &mut Criterion) {
    let mut arena = page_arena();
    c.bench_function("arena_scope_rollback", |b| {
        b.iter(|| {
            let mark = arena.scope_start();
            // 16 pushes of 1KiB span several 4KiB blocks.
            churn(&mut arena, 16, 1024);
            black_box(arena.block_count());
            arena.scope_end(mark);
        });
    });
}

/// Benchmark: fill several blocks, then clear back to one warm block.
fn bench_clear_reuse(c: &mut Criterion) {
    let mut arena = page_arena();
    c.bench_function("arena_clear_reuse", |b| {
        b.iter(|| {
            churn(&mut arena, 64, 1024);
            arena.clear();
            black_box(arena.memory_bytes());
        });
    });
}

/// Benchmark: arena construction plus first (block-materialising) push.
fn bench_cold_first_push(c: &mut Criterion) {
    c.bench_function("arena_cold_first_push", |b| {
        b.iter(|| {
            let mut arena = slab_arena();
            black_box(arena.push(64, 8).expect("first push"));
        });
    });
}

criterion_group!(
    benches,
    bench_push_64b,
    bench_scope_rollback,
    bench_clear_reuse,
    bench_cold_first_push
);
criterion_main!(benches);
