//! Configuration for the replacer.

use super::{Error, Result};

/// Number of frames used when no capacity is given.
pub const DEFAULT_POOL_SIZE: usize = 64;

/// Construction-time settings for a replacer.
///
/// Capacity is the only knob: the number of distinct frame ids the
/// buffer pool will ever hand to the replacer. It never changes after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacerConfig {
    /// Number of frames in the pool.
    pub capacity: usize,
}

impl ReplacerConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject configurations no buffer pool can use.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `capacity` is 0
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig("capacity must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for ReplacerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}
