//! Loam: a region-based bump allocator with scoped rollback.
//!
//! Allocate many short-lived objects together, then release them as a group
//! with O(1) bookkeeping — no per-object free. Memory comes from a growable
//! stack of fixed-capacity blocks; nested scope checkpoints roll the arena
//! back to an earlier position, reclaiming everything allocated since.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! let mut arena = Arena::with_min_block_capacity(1024);
//!
//! // Allocations come back as handles, resolved through the arena.
//! let greeting = arena.alloc_array::<u8>(5).unwrap();
//! arena.array_mut::<u8>(greeting).unwrap().copy_from_slice(b"hello");
//!
//! // Everything allocated inside a scope is reclaimed when it closes.
//! let mark = arena.scope_start();
//! let scratch = arena.push(256, 16).unwrap();
//! assert_eq!(scratch.len(), 256);
//! arena.scope_end(mark);
//!
//! // Allocations made before the checkpoint are untouched.
//! assert_eq!(arena.array::<u8>(greeting).unwrap(), b"hello");
//!
//! // Dropping the arena releases every block.
//! drop(arena);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `loam-arena` | `Arena`, blocks, scopes, handles, config, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena storage, scopes, and handles (`loam-arena`).
///
/// Most users only need the types in the [`prelude`]; reach into this
/// module for the rest ([`arena::align_forward`], [`arena::ArenaId`]).
pub use loam_arena as arena;

/// The commonly used subset of the API.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    pub use loam_arena::{AllocHandle, Arena, ArenaConfig, ArenaError, ScopeToken};
}
