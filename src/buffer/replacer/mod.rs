//! Eviction policy implementations (replacers).
//!
//! - [`LruReplacer`] - evicts the frame that has been unpinned the longest
//! - [`SharedReplacer`] - mutex wrapper for use from many threads

mod lru;
mod shared;

pub use lru::{Iter, LruReplacer};
pub use shared::SharedReplacer;

use crate::common::{FrameId, Result};

/// The operations a buffer pool manager drives an eviction policy with.
///
/// - page pinned: [`mark_non_evictable`](Replacer::mark_non_evictable)
/// - pin count reaches zero: [`mark_evictable`](Replacer::mark_evictable)
/// - no free frame left: [`evict`](Replacer::evict)
///
/// Implementations are not synchronized; see [`SharedReplacer`].
pub trait Replacer {
    /// Mark a frame as a candidate for eviction.
    fn mark_evictable(&mut self, frame_id: FrameId) -> Result<()>;

    /// Withdraw a frame from eviction.
    fn mark_non_evictable(&mut self, frame_id: FrameId) -> Result<()>;

    /// Select and remove a victim, or `None` if nothing is evictable.
    fn evict(&mut self) -> Option<FrameId>;

    /// Whether the frame is currently a candidate for eviction.
    fn is_evictable(&self, frame_id: FrameId) -> Result<bool>;

    /// Number of evictable frames.
    fn size(&self) -> usize;
}

impl Replacer for LruReplacer {
    fn mark_evictable(&mut self, frame_id: FrameId) -> Result<()> {
        LruReplacer::mark_evictable(self, frame_id)
    }

    fn mark_non_evictable(&mut self, frame_id: FrameId) -> Result<()> {
        LruReplacer::mark_non_evictable(self, frame_id)
    }

    fn evict(&mut self) -> Option<FrameId> {
        LruReplacer::evict(self)
    }

    fn is_evictable(&self, frame_id: FrameId) -> Result<bool> {
        LruReplacer::is_evictable(self, frame_id)
    }

    fn size(&self) -> usize {
        LruReplacer::size(self)
    }
}
