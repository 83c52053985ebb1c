//! Block-chained bump allocation with scoped rollback.
//!
//! An [`Arena`] hands out aligned allocations by advancing a cursor through
//! a stack of fixed-capacity blocks, and reclaims them in bulk: close a
//! scope checkpoint and everything allocated since it opened is gone in
//! O(blocks released). There is no per-object free.
//!
//! # Architecture
//!
//! ```text
//! Arena (owner)
//! ├── Block[*]      (oldest → head; fixed-capacity zeroed Vec<u8> + bump cursor)
//! ├── ArenaConfig   (minimum block capacity, fixed at construction)
//! └── scope depth   (LIFO checkpoint counter)
//!
//! AllocHandle  = (block index, offset, len)       → resolves to &[u8] / typed views
//! ScopeToken   = (arena id, block index, offset, nesting id)  → consumed by scope_end
//! ```
//!
//! Callers never see raw addresses. Allocations come back as [`AllocHandle`]s
//! resolved through the arena, so staleness ("that block was rolled back")
//! is a checkable error rather than a dangling pointer. Scope tokens are
//! consumed by value — closing a scope twice is a compile error, and closing
//! scopes out of LIFO order is a panic.
//!
//! # Contract vs. resource errors
//!
//! Programmer misuse (non-power-of-two alignment, zero minimum capacity,
//! out-of-order scope close, a token from a different arena) panics: the
//! violated invariants are structural and continuing would corrupt the block
//! stack. Exhaustion of the system allocator is the one recoverable failure
//! and surfaces as [`ArenaError::AllocationFailed`], leaving the arena
//! untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod align;
pub mod arena;
mod block;
pub mod config;
pub mod error;
pub mod handle;
pub mod scope;

// Public re-exports for the primary API surface.
pub use align::align_forward;
pub use arena::{Arena, ArenaId};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::AllocHandle;
pub use scope::ScopeToken;
