//! Benchmark profiles and utilities for the Loam allocator.
//!
//! Provides pre-built arena constructors and workload helpers shared by
//! the criterion benches:
//!
//! - [`page_arena`]: 4KiB-minimum arena (the default profile)
//! - [`slab_arena`]: 64KiB-minimum arena for push-throughput runs
//! - [`churn`]: fixed-size push workload

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_arena::Arena;

/// Build an arena with the default 4KiB minimum block capacity.
pub fn page_arena() -> Arena {
    Arena::with_min_block_capacity(4096)
}

/// Build an arena with a 64KiB minimum block capacity.
///
/// Large enough that small-push workloads stay within one block, so the
/// push fast path dominates the measurement.
pub fn slab_arena() -> Arena {
    Arena::with_min_block_capacity(64 * 1024)
}

/// Push `count` allocations of `size` bytes at 8-byte alignment.
pub fn churn(arena: &mut Arena, count: usize, size: usize) {
    for _ in 0..count {
        arena.push(size, 8).expect("bench push");
    }
}
