//! Thread-safe wrapper around a replacer.

use parking_lot::Mutex;

use super::{LruReplacer, Replacer};
use crate::common::{FrameId, Result};

/// A replacer shared between threads.
///
/// Every operation holds one mutex for its whole duration, so the
/// wrapped replacer's order and index are never observed half-updated.
/// Use [`with_lock`](Self::with_lock) when several operations must
/// happen as one step.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use lru_replacer::{FrameId, SharedReplacer};
///
/// let replacer = Arc::new(SharedReplacer::with_capacity(4));
/// replacer.mark_evictable(FrameId::new(2)).unwrap();
/// assert_eq!(replacer.evict(), Some(FrameId::new(2)));
/// ```
#[derive(Debug)]
pub struct SharedReplacer<R = LruReplacer> {
    inner: Mutex<R>,
}

impl SharedReplacer<LruReplacer> {
    /// Shared LRU replacer for frame ids in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(LruReplacer::new(capacity))
    }
}

impl<R: Replacer> SharedReplacer<R> {
    pub fn new(replacer: R) -> Self {
        Self {
            inner: Mutex::new(replacer),
        }
    }

    /// See [`Replacer::mark_evictable`].
    pub fn mark_evictable(&self, frame_id: FrameId) -> Result<()> {
        self.inner.lock().mark_evictable(frame_id)
    }

    /// See [`Replacer::mark_non_evictable`].
    pub fn mark_non_evictable(&self, frame_id: FrameId) -> Result<()> {
        self.inner.lock().mark_non_evictable(frame_id)
    }

    /// See [`Replacer::evict`].
    pub fn evict(&self) -> Option<FrameId> {
        self.inner.lock().evict()
    }

    pub fn is_evictable(&self, frame_id: FrameId) -> Result<bool> {
        self.inner.lock().is_evictable(frame_id)
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// Run `f` with exclusive access to the replacer.
    pub fn with_lock<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Replacer + Default> Default for SharedReplacer<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}
