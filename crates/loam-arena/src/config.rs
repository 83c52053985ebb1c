//! Arena configuration parameters.

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Floor size, in bytes, for a newly created block.
    ///
    /// Default: 4096. Must be greater than zero. A push larger than this
    /// gets its own exact-fit block instead.
    pub min_block_capacity: usize,
}

impl ArenaConfig {
    /// Default minimum block capacity: one 4KiB page.
    pub const DEFAULT_MIN_BLOCK_CAPACITY: usize = 4096;

    /// Create a config with the given minimum block capacity.
    ///
    /// # Panics
    ///
    /// Panics if `min_block_capacity` is zero.
    pub fn new(min_block_capacity: usize) -> Self {
        assert!(
            min_block_capacity > 0,
            "min_block_capacity must be greater than zero"
        );
        Self { min_block_capacity }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_BLOCK_CAPACITY)
    }
}
