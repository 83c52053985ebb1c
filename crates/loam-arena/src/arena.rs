//! The arena allocator.
//!
//! [`Arena`] owns a stack of fixed-capacity blocks (oldest first, head
//! last) and bump-allocates from the head. When a request does not fit,
//! a fresh block is created for it — at least
//! [`min_block_capacity`](crate::ArenaConfig::min_block_capacity) bytes,
//! or exact-fit for oversized requests. Bulk reclamation happens through
//! scope checkpoints (see [`crate::scope`]), [`Arena::clear`], or drop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::{fmt, mem};

use bytemuck::Pod;
use smallvec::SmallVec;

use crate::align::align_forward;
use crate::block::Block;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::AllocHandle;

/// Counter for unique [`ArenaId`] allocation.
static ARENA_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an [`Arena`].
///
/// Allocated from a monotonic atomic counter. Scope tokens carry the id of
/// the arena that issued them, so closing a token against the wrong arena
/// is detected instead of silently corrupting a block stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u64);

impl ArenaId {
    /// Allocate a fresh, unique instance id.
    fn next() -> Self {
        Self(ARENA_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A region allocator: bump allocation from a stack of blocks, bulk
/// reclamation via scopes, `clear`, or drop.
///
/// Every mutating operation takes `&mut self`; the arena holds no
/// synchronization and is meant to be owned by a single logical task.
/// Dropping the arena releases every block — that is the tear-it-all-down
/// operation, valid even with scopes still open.
pub struct Arena {
    /// This arena's unique id, stamped into scope tokens.
    pub(crate) id: ArenaId,
    /// Block stack, oldest first. The last element is the head — the only
    /// block bump-allocated into.
    pub(crate) blocks: SmallVec<[Block; 4]>,
    /// Sizing policy, fixed at construction.
    pub(crate) config: ArenaConfig,
    /// Number of currently open scopes.
    pub(crate) scope_depth: u32,
}

impl Arena {
    /// Create an arena with the given configuration.
    ///
    /// No blocks are allocated until the first push.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            id: ArenaId::next(),
            blocks: SmallVec::new(),
            config,
            scope_depth: 0,
        }
    }

    /// Create an arena with the given minimum block capacity in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `min_block_capacity` is zero.
    pub fn with_min_block_capacity(min_block_capacity: usize) -> Self {
        Self::new(ArenaConfig::new(min_block_capacity))
    }

    /// This arena's unique instance id.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// Allocate `size` bytes at `align` and return a handle to the range.
    ///
    /// Zero-size requests are valid and return an aligned, zero-length
    /// handle (materialising a block on an empty arena, like any other
    /// push). At most one new block is created per call; a request that
    /// does not fit the head block gets a fresh block sized for that
    /// request alone, leaving any slack in older blocks unused.
    ///
    /// # Errors
    ///
    /// [`ArenaError::AllocationFailed`] if the system allocator cannot back
    /// a needed block. The arena is left exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics if `align` is zero or not a power of two.
    pub fn push(&mut self, size: usize, align: usize) -> Result<AllocHandle, ArenaError> {
        assert!(
            align.is_power_of_two(),
            "alignment must be a nonzero power of two (got {align})"
        );

        if !self.blocks.is_empty() {
            let index = self.blocks.len() - 1;
            if let Some(offset) = self.blocks[index].alloc(size, align) {
                return Ok(AllocHandle::new(index as u32, offset, size));
            }
        }

        // No block yet, or the head is full: fresh block for this request.
        let mut block = Block::new(self.block_capacity_for(size, align))?;
        let offset = block
            .alloc(size, align)
            .expect("a fresh block is sized to fit its first request");
        self.blocks.push(block);
        Ok(AllocHandle::new(
            (self.blocks.len() - 1) as u32,
            offset,
            size,
        ))
    }

    /// Allocate one `T` and return its handle.
    ///
    /// Equivalent to `push(size_of::<T>(), align_of::<T>())`; resolve with
    /// [`Arena::value`] / [`Arena::value_mut`]. Fresh allocations read as
    /// `T`'s all-zeroes bit pattern.
    pub fn alloc_value<T: Pod>(&mut self) -> Result<AllocHandle, ArenaError> {
        self.push(mem::size_of::<T>(), mem::align_of::<T>())
    }

    /// Allocate `count` contiguous `T`s and return their handle.
    ///
    /// Resolve with [`Arena::array`] / [`Arena::array_mut`].
    pub fn alloc_array<T: Pod>(&mut self, count: usize) -> Result<AllocHandle, ArenaError> {
        self.push(mem::size_of::<T>() * count, mem::align_of::<T>())
    }

    /// Resolve a handle to its byte range.
    ///
    /// # Errors
    ///
    /// [`ArenaError::StaleHandle`] if the handle's block was released or
    /// its range trimmed by a rollback or [`Arena::clear`].
    pub fn bytes(&self, handle: AllocHandle) -> Result<&[u8], ArenaError> {
        let block = self.live_block(handle)?;
        Ok(block.slice(handle.offset, handle.len))
    }

    /// Resolve a handle to its mutable byte range.
    ///
    /// # Errors
    ///
    /// [`ArenaError::StaleHandle`] as for [`Arena::bytes`].
    pub fn bytes_mut(&mut self, handle: AllocHandle) -> Result<&mut [u8], ArenaError> {
        self.live_block(handle)?;
        Ok(self.blocks[handle.block as usize].slice_mut(handle.offset, handle.len))
    }

    /// Resolve a handle created by [`Arena::alloc_value`] to `&T`.
    ///
    /// # Panics
    ///
    /// Panics if the handle's range does not match `T`'s size and
    /// alignment — i.e. it was not allocated as a `T`.
    pub fn value<T: Pod>(&self, handle: AllocHandle) -> Result<&T, ArenaError> {
        Ok(bytemuck::from_bytes(self.bytes(handle)?))
    }

    /// Resolve a handle created by [`Arena::alloc_value`] to `&mut T`.
    ///
    /// # Panics
    ///
    /// Panics as for [`Arena::value`].
    pub fn value_mut<T: Pod>(&mut self, handle: AllocHandle) -> Result<&mut T, ArenaError> {
        Ok(bytemuck::from_bytes_mut(self.bytes_mut(handle)?))
    }

    /// Resolve a handle created by [`Arena::alloc_array`] to `&[T]`.
    ///
    /// # Panics
    ///
    /// Panics if the handle's range is not a whole number of properly
    /// aligned `T`s.
    pub fn array<T: Pod>(&self, handle: AllocHandle) -> Result<&[T], ArenaError> {
        Ok(bytemuck::cast_slice(self.bytes(handle)?))
    }

    /// Resolve a handle created by [`Arena::alloc_array`] to `&mut [T]`.
    ///
    /// # Panics
    ///
    /// Panics as for [`Arena::array`].
    pub fn array_mut<T: Pod>(&mut self, handle: AllocHandle) -> Result<&mut [T], ArenaError> {
        Ok(bytemuck::cast_slice_mut(self.bytes_mut(handle)?))
    }

    /// Release every block except the oldest and reset its cursor to zero.
    ///
    /// No-op on an arena with no blocks. Keeps one warm block so the next
    /// push does not hit the system allocator. Does **not** reset the scope
    /// depth: clearing while scopes are open invalidates their checkpoints,
    /// which trips a panic at the offending `scope_end` — caller error.
    pub fn clear(&mut self) {
        if self.blocks.is_empty() {
            return;
        }
        self.blocks.truncate(1);
        self.blocks[0].reset();
    }

    /// Number of blocks currently allocated.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of currently open scopes.
    pub fn scope_depth(&self) -> u32 {
        self.scope_depth
    }

    /// Bytes currently allocated across all blocks (cursor positions,
    /// including alignment padding).
    pub fn used_bytes(&self) -> usize {
        self.blocks.iter().map(|b| b.used()).sum()
    }

    /// Total backing memory across all blocks in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(|b| b.capacity()).sum()
    }

    /// Capacity for a new block serving a `size`-byte request at `align`:
    /// at least the configured minimum, padded so the request fits
    /// wherever the backing buffer lands in the address space.
    fn block_capacity_for(&self, size: usize, align: usize) -> usize {
        align_forward(size.max(self.config.min_block_capacity), align) + (align - 1)
    }

    /// Validate a handle against the live block stack.
    fn live_block(&self, handle: AllocHandle) -> Result<&Block, ArenaError> {
        let stale = ArenaError::StaleHandle {
            block: handle.block,
            offset: handle.offset,
            len: handle.len,
        };
        let block = self.blocks.get(handle.block as usize).ok_or(stale.clone())?;
        if handle.offset + handle.len > block.used() {
            return Err(stale);
        }
        Ok(block)
    }
}
