//! Loam quickstart — the allocator's full surface in one sitting.
//!
//! Demonstrates:
//!   1. Creating an arena with a minimum block capacity
//!   2. Typed allocation (single values and arrays)
//!   3. Scope checkpoints and rollback
//!   4. `clear` and memory accounting
//!
//! Run with:
//!   cargo run --example quickstart

use loam::prelude::*;

fn main() {
    // ─── Arena construction ─────────────────────────────────────
    //
    // One 1MiB-minimum arena. Nothing is allocated until the first push.

    let mut arena = Arena::with_min_block_capacity(1024 * 1024);

    // ─── Typed allocation ───────────────────────────────────────

    let answer = arena.alloc_value::<f64>().expect("alloc f64");
    *arena.value_mut::<f64>(answer).expect("live handle") = 25.67;
    println!("double's value: {}", arena.value::<f64>(answer).unwrap());

    let samples = arena.alloc_array::<u32>(16).expect("alloc array");
    for (i, cell) in arena
        .array_mut::<u32>(samples)
        .expect("live handle")
        .iter_mut()
        .enumerate()
    {
        *cell = (i * i) as u32;
    }
    println!("samples[15] = {}", arena.array::<u32>(samples).unwrap()[15]);

    // ─── Scoped rollback ────────────────────────────────────────
    //
    // Everything pushed between scope_start and scope_end is reclaimed
    // in one step; the allocations above are untouched.

    let before = arena.used_bytes();
    let mark = arena.scope_start();
    for _ in 0..1000 {
        arena.push(64, 8).expect("scratch push");
    }
    println!("inside scope: {} bytes used", arena.used_bytes());
    arena.scope_end(mark);
    assert_eq!(arena.used_bytes(), before);
    println!("after rollback: {} bytes used", arena.used_bytes());

    // ─── Accounting and clear ───────────────────────────────────

    println!(
        "blocks: {}, backing memory: {} bytes",
        arena.block_count(),
        arena.memory_bytes()
    );

    arena.clear();
    println!(
        "after clear: {} block(s), {} bytes used",
        arena.block_count(),
        arena.used_bytes()
    );

    // Dropping the arena releases everything.
    drop(arena);
}
