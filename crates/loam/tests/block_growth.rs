//! Integration test: block-chain growth, clear, and typed views.
//!
//! Covers the sizing policy (minimum-capacity floor, exact-fit oversized
//! blocks), the one-warm-block behaviour of `clear`, and the Pod-typed
//! allocation layer.

use bytemuck::{Pod, Zeroable};
use loam::prelude::*;

#[test]
fn overflow_forces_a_new_block_at_its_start() {
    // 32 + 24 fill a 64-byte-minimum block; 48 more cannot fit.
    let mut arena = Arena::with_min_block_capacity(64);

    let p1 = arena.push(32, 8).unwrap();
    let p2 = arena.push(24, 8).unwrap();
    assert_eq!(arena.block_count(), 1);
    assert_eq!(p1.block(), p2.block());
    assert!(p2.offset() >= p1.offset() + p1.len());

    let p3 = arena.push(48, 8).unwrap();
    assert_eq!(arena.block_count(), 2);
    assert_eq!(p3.block(), 1);
    // Start of the new block's data region, modulo base alignment padding.
    assert!(p3.offset() < 8);
}

#[test]
fn requests_above_the_minimum_get_their_own_block() {
    let mut arena = Arena::with_min_block_capacity(256);
    arena.push(16, 8).unwrap();

    let big = arena.push(10_000, 8).unwrap();
    assert_eq!(arena.block_count(), 2);
    assert_eq!(big.block(), 1);
    assert_eq!(big.len(), 10_000);

    // The oversized block is now head with no room to spare, so the next
    // small push opens a third block; slack in older blocks is never
    // revisited.
    let after = arena.push(16, 8).unwrap();
    assert_eq!(after.block(), 2);
}

#[test]
fn clear_collapses_to_one_empty_block() {
    let mut arena = Arena::with_min_block_capacity(64);
    for _ in 0..8 {
        arena.push(60, 4).unwrap();
    }
    let blocks_before = arena.block_count();
    assert!(blocks_before > 1);

    arena.clear();
    assert_eq!(arena.block_count(), 1);
    assert_eq!(arena.used_bytes(), 0);
    assert!(arena.memory_bytes() > 0);

    // Next allocation lands at the start of the surviving block.
    let handle = arena.push(32, 4).unwrap();
    assert_eq!(handle.block(), 0);
    assert!(handle.offset() < 4);
}

#[test]
fn memory_accounting_tracks_growth_and_clear() {
    let mut arena = Arena::with_min_block_capacity(1024);
    assert_eq!(arena.memory_bytes(), 0);
    assert_eq!(arena.used_bytes(), 0);

    arena.push(100, 1).unwrap();
    let after_one = arena.memory_bytes();
    assert!(after_one >= 1024);
    assert_eq!(arena.used_bytes(), 100);

    arena.push(2048, 1).unwrap();
    assert!(arena.memory_bytes() >= after_one + 2048);

    arena.clear();
    assert_eq!(arena.memory_bytes(), after_one);
    assert_eq!(arena.used_bytes(), 0);
}

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Particle {
    position: [f32; 2],
    velocity: [f32; 2],
    ttl: f32,
}

#[test]
fn typed_views_round_trip_through_handles() {
    let mut arena = Arena::with_min_block_capacity(4096);

    let one = arena.alloc_value::<Particle>().unwrap();
    // Fresh allocations read as the all-zeroes Particle.
    assert_eq!(arena.value::<Particle>(one).unwrap().ttl, 0.0);

    arena.value_mut::<Particle>(one).unwrap().ttl = 2.5;
    assert_eq!(arena.value::<Particle>(one).unwrap().ttl, 2.5);

    let swarm = arena.alloc_array::<Particle>(100).unwrap();
    {
        let particles = arena.array_mut::<Particle>(swarm).unwrap();
        assert_eq!(particles.len(), 100);
        for (i, p) in particles.iter_mut().enumerate() {
            p.position = [i as f32, 0.0];
        }
    }
    let particles = arena.array::<Particle>(swarm).unwrap();
    assert_eq!(particles[99].position, [99.0, 0.0]);

    // The scalar allocated first is untouched by the array writes.
    assert_eq!(arena.value::<Particle>(one).unwrap().ttl, 2.5);
}

#[test]
fn zero_size_pushes_are_distinct_and_live() {
    let mut arena = Arena::with_min_block_capacity(64);
    let a = arena.push(0, 8).unwrap();
    let b = arena.push(1, 8).unwrap();
    let c = arena.push(0, 8).unwrap();

    assert!(a.is_empty() && c.is_empty());
    assert!(arena.bytes(a).unwrap().is_empty());
    assert!(arena.bytes(c).unwrap().is_empty());
    // The byte in between keeps the zero-size handles from overlapping it.
    assert_ne!(b.offset(), c.offset());
}
