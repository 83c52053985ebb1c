//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Only recoverable conditions appear here. Contract violations (bad
/// alignments, out-of-order scope closes) panic instead — see the crate
/// docs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The system allocator could not provide backing storage for a new
    /// block. The arena is unchanged by the failed call.
    AllocationFailed {
        /// Number of bytes requested from the system allocator.
        requested: usize,
    },
    /// An [`AllocHandle`](crate::AllocHandle) whose byte range is no longer
    /// live — its block was released or its range was trimmed by a scope
    /// rollback or [`clear`](crate::Arena::clear).
    StaleHandle {
        /// Block index encoded in the handle.
        block: u32,
        /// Byte offset encoded in the handle.
        offset: usize,
        /// Length in bytes encoded in the handle.
        len: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "backing allocation failed: requested {requested} bytes")
            }
            Self::StaleHandle { block, offset, len } => {
                write!(
                    f,
                    "stale handle: block {block}, bytes {offset}..{} are no longer live",
                    offset + len
                )
            }
        }
    }
}

impl Error for ArenaError {}
