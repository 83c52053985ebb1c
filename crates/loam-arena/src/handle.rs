//! Allocation handles.
//!
//! An [`AllocHandle`] encodes the physical location of one allocation
//! within an arena: which block, at what offset, how many bytes. Handles
//! resolve to byte slices or typed views in O(1) through the owning
//! [`Arena`](crate::Arena); they are never raw addresses.

use std::fmt;

/// Physical location of an allocation within an arena.
///
/// Handles are plain data — copying one does not duplicate the allocation,
/// and a handle kept across the close of its enclosing scope resolves to
/// [`ArenaError::StaleHandle`](crate::ArenaError::StaleHandle) (or, if the
/// range has since been reused, to the new contents — retaining handles
/// past their scope is a caller error).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct AllocHandle {
    /// Index of the block this allocation lives in.
    pub(crate) block: u32,
    /// Byte offset of the (aligned) start within the block's data region.
    pub(crate) offset: usize,
    /// Length of the allocation in bytes.
    pub(crate) len: usize,
}

impl AllocHandle {
    /// Create a new handle.
    pub(crate) fn new(block: u32, offset: usize, len: usize) -> Self {
        Self { block, offset, len }
    }

    /// Index of the block this allocation lives in.
    ///
    /// Blocks are numbered oldest-first; the head block has the highest
    /// index.
    pub fn block(&self) -> u32 {
        self.block
    }

    /// Byte offset of the allocation within its block's data region.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for AllocHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocHandle(block={}, off={}, len={})",
            self.block, self.offset, self.len
        )
    }
}
