//! LRU (Least Recently Unpinned) replacement policy.
//!
//! Frames are ordered by when they were last made evictable. The frame
//! that has been evictable the longest is the next victim.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::common::{Error, FrameId, ReplacerConfig, Result};

/// Neighbours of a tracked frame in the eviction order.
///
/// `prev` points toward the head (more recently unpinned), `next` toward
/// the tail (the victim end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    prev: Option<FrameId>,
    next: Option<FrameId>,
}

/// An O(1) LRU replacer over a fixed set of frames.
///
/// # Layout
/// ```text
///   head (most recent)                       tail (victim)
///      │                                         │
///      ▼                                         ▼
///   Frame(2) ◀──▶ Frame(5) ◀──▶ Frame(1) ◀──▶ Frame(0)
///
///   slots: [Some(link), Some(link), None, None, None, Some(link), ...]
///            frame 0     frame 1   pinned                frame 5
/// ```
///
/// `slots` is indexed by frame id. A `Some` entry is both the list node
/// and the position index entry; `None` means the frame is not tracked
/// (pinned, evicted, or never unpinned). Removing a frame never needs a
/// scan, and there are no iterators or pointers to invalidate.
///
/// # Thread Safety
/// Not synchronized. Mutating operations take `&mut self`; wrap the
/// replacer in a [`SharedReplacer`](super::SharedReplacer) to share it.
///
/// # Example
/// ```
/// use lru_replacer::{FrameId, LruReplacer};
///
/// let mut replacer = LruReplacer::new(3);
/// replacer.mark_evictable(FrameId::new(0)).unwrap();
/// replacer.mark_evictable(FrameId::new(1)).unwrap();
///
/// assert_eq!(replacer.evict(), Some(FrameId::new(0)));
/// assert_eq!(replacer.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LruReplacer {
    /// Position index: one slot per frame id.
    slots: Vec<Option<Link>>,

    /// Most recently unpinned frame.
    head: Option<FrameId>,

    /// Least recently unpinned frame (next victim).
    tail: Option<FrameId>,

    /// Number of tracked frames.
    len: usize,
}

impl LruReplacer {
    /// Create a replacer for frame ids in `[0, capacity)`.
    ///
    /// All frames start untracked.
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "creating LRU replacer");
        Self {
            slots: vec![None; capacity],
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a replacer from a validated config.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if the config is rejected
    pub fn with_config(config: &ReplacerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Number of frame ids this replacer accepts.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of evictable frames.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the frame is currently tracked as evictable.
    ///
    /// # Errors
    /// - `Error::FrameOutOfRange` if `frame_id >= capacity`
    pub fn is_evictable(&self, frame_id: FrameId) -> Result<bool> {
        let idx = self.check_range(frame_id)?;
        Ok(self.slots[idx].is_some())
    }

    /// Mark a frame as evictable (its pin count dropped to 0).
    ///
    /// The frame goes to the head of the order. Unpinning a frame that is
    /// already evictable does nothing, so it keeps its current position.
    ///
    /// # Errors
    /// - `Error::FrameOutOfRange` if `frame_id >= capacity`
    pub fn mark_evictable(&mut self, frame_id: FrameId) -> Result<()> {
        let idx = self.check_range(frame_id)?;
        if self.slots[idx].is_some() {
            return Ok(());
        }

        self.push_front(frame_id);
        trace!(%frame_id, size = self.len, "frame made evictable");
        Ok(())
    }

    /// Mark a frame as non-evictable (it was pinned).
    ///
    /// Pinning a frame that is not tracked does nothing.
    ///
    /// # Errors
    /// - `Error::FrameOutOfRange` if `frame_id >= capacity`
    pub fn mark_non_evictable(&mut self, frame_id: FrameId) -> Result<()> {
        self.check_range(frame_id)?;
        if self.unlink(frame_id).is_some() {
            trace!(%frame_id, size = self.len, "frame pinned");
        }
        Ok(())
    }

    /// Remove and return the frame that has been evictable the longest.
    ///
    /// Returns `None` if no frame is evictable; the order is not touched.
    pub fn evict(&mut self) -> Option<FrameId> {
        let victim = self.tail?;
        self.unlink(victim);
        trace!(frame_id = %victim, size = self.len, "frame evicted");
        Some(victim)
    }

    /// The frame `evict()` would return, without removing it.
    pub fn peek_victim(&self) -> Option<FrameId> {
        self.tail
    }

    /// Iterate the eviction order from most recently unpinned to next victim.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            replacer: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn check_range(&self, frame_id: FrameId) -> Result<usize> {
        let idx = frame_id.as_index();
        if idx >= self.slots.len() {
            return Err(Error::FrameOutOfRange {
                frame_id,
                capacity: self.slots.len(),
            });
        }
        Ok(idx)
    }

    fn set_prev(&mut self, frame_id: FrameId, prev: Option<FrameId>) {
        if let Some(link) = self.slots[frame_id.as_index()].as_mut() {
            link.prev = prev;
        }
    }

    fn set_next(&mut self, frame_id: FrameId, next: Option<FrameId>) {
        if let Some(link) = self.slots[frame_id.as_index()].as_mut() {
            link.next = next;
        }
    }

    /// Insert an untracked, in-range frame at the head.
    fn push_front(&mut self, frame_id: FrameId) {
        let old_head = self.head;
        match old_head {
            Some(h) => self.set_prev(h, Some(frame_id)),
            None => self.tail = Some(frame_id),
        }

        self.slots[frame_id.as_index()] = Some(Link {
            prev: None,
            next: old_head,
        });
        self.head = Some(frame_id);
        self.len += 1;
    }

    /// Detach an in-range frame from the order, clearing its slot.
    ///
    /// Returns `None` if the frame was not tracked.
    fn unlink(&mut self, frame_id: FrameId) -> Option<Link> {
        let link = self.slots[frame_id.as_index()].take()?;

        match link.prev {
            Some(p) => self.set_next(p, link.next),
            None => self.head = link.next,
        }
        match link.next {
            Some(n) => self.set_prev(n, link.prev),
            None => self.tail = link.prev,
        }

        self.len -= 1;
        Some(link)
    }
}

impl Default for LruReplacer {
    fn default() -> Self {
        Self::new(ReplacerConfig::default().capacity)
    }
}

impl<'a> IntoIterator for &'a LruReplacer {
    type Item = FrameId;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the eviction order, head to tail.
///
/// Created by [`LruReplacer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    replacer: &'a LruReplacer,
    cursor: Option<FrameId>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = FrameId;

    fn next(&mut self) -> Option<FrameId> {
        let current = self.cursor?;
        self.cursor = self.replacer.slots[current.as_index()].and_then(|link| link.next);
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn fid(id: usize) -> FrameId {
        FrameId::new(id)
    }

    fn order(replacer: &LruReplacer) -> Vec<usize> {
        replacer.iter().map(|f| f.0).collect()
    }

    /// Walk the list both ways and compare against the slot table.
    fn assert_consistent(replacer: &LruReplacer) {
        let forward: Vec<FrameId> = replacer.iter().collect();
        assert_eq!(forward.len(), replacer.size());

        let mut backward = Vec::new();
        let mut cursor = replacer.tail;
        while let Some(f) = cursor {
            backward.push(f);
            cursor = replacer.slots[f.0].and_then(|l| l.prev);
        }
        backward.reverse();
        assert_eq!(forward, backward);

        let tracked = replacer.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(tracked, replacer.size());
        for f in &forward {
            assert!(replacer.is_evictable(*f).unwrap());
        }
    }

    #[test]
    fn test_lru_basic() {
        let mut replacer = LruReplacer::new(3);

        replacer.mark_evictable(fid(0)).unwrap();
        replacer.mark_evictable(fid(1)).unwrap();
        replacer.mark_evictable(fid(2)).unwrap();
        assert_eq!(replacer.size(), 3);
        assert_eq!(order(&replacer), vec![2, 1, 0]);

        assert_eq!(replacer.evict(), Some(fid(0)));
        assert_eq!(replacer.size(), 2);

        replacer.mark_non_evictable(fid(2)).unwrap();
        assert_eq!(replacer.size(), 1);
        assert_eq!(order(&replacer), vec![1]);

        assert_eq!(replacer.evict(), Some(fid(1)));
        assert_eq!(replacer.size(), 0);
        assert_eq!(replacer.evict(), None);
        assert_consistent(&replacer);
    }

    #[test]
    fn test_evict_empty() {
        let mut replacer = LruReplacer::new(2);
        assert_eq!(replacer.evict(), None);
        assert_eq!(replacer.size(), 0);
        assert!(replacer.is_empty());
        assert_eq!(replacer.peek_victim(), None);
    }

    #[test]
    fn test_double_unpin_keeps_position() {
        let mut replacer = LruReplacer::new(4);
        replacer.mark_evictable(fid(0)).unwrap();
        replacer.mark_evictable(fid(1)).unwrap();
        replacer.mark_evictable(fid(0)).unwrap();

        assert_eq!(replacer.size(), 2);
        assert_eq!(order(&replacer), vec![1, 0]);
        assert_eq!(replacer.evict(), Some(fid(0)));
    }

    #[test]
    fn test_pin_untracked_is_noop() {
        let mut replacer = LruReplacer::new(4);
        replacer.mark_evictable(fid(1)).unwrap();

        replacer.mark_non_evictable(fid(3)).unwrap();
        replacer.mark_non_evictable(fid(3)).unwrap();

        assert_eq!(replacer.size(), 1);
        assert_eq!(order(&replacer), vec![1]);
    }

    #[test]
    fn test_pin_middle_head_tail() {
        let mut replacer = LruReplacer::new(5);
        for i in 0..5 {
            replacer.mark_evictable(fid(i)).unwrap();
        }

        // middle
        replacer.mark_non_evictable(fid(2)).unwrap();
        assert_eq!(order(&replacer), vec![4, 3, 1, 0]);
        assert_consistent(&replacer);

        // head
        replacer.mark_non_evictable(fid(4)).unwrap();
        assert_eq!(order(&replacer), vec![3, 1, 0]);
        assert_consistent(&replacer);

        // tail
        replacer.mark_non_evictable(fid(0)).unwrap();
        assert_eq!(order(&replacer), vec![3, 1]);
        assert_eq!(replacer.peek_victim(), Some(fid(1)));
        assert_consistent(&replacer);
    }

    #[test]
    fn test_repin_then_unpin_moves_to_head() {
        let mut replacer = LruReplacer::new(3);
        replacer.mark_evictable(fid(0)).unwrap();
        replacer.mark_evictable(fid(1)).unwrap();

        replacer.mark_non_evictable(fid(0)).unwrap();
        replacer.mark_evictable(fid(0)).unwrap();

        assert_eq!(order(&replacer), vec![0, 1]);
        assert_eq!(replacer.evict(), Some(fid(1)));
        assert_eq!(replacer.evict(), Some(fid(0)));
    }

    #[test]
    fn test_single_frame_unlink() {
        let mut replacer = LruReplacer::new(1);
        replacer.mark_evictable(fid(0)).unwrap();
        replacer.mark_non_evictable(fid(0)).unwrap();

        assert!(replacer.head.is_none());
        assert!(replacer.tail.is_none());
        assert_eq!(replacer.evict(), None);
    }

    #[test]
    fn test_out_of_range() {
        let mut replacer = LruReplacer::new(2);
        replacer.mark_evictable(fid(1)).unwrap();

        let expected = Error::FrameOutOfRange {
            frame_id: fid(2),
            capacity: 2,
        };
        assert_eq!(replacer.mark_evictable(fid(2)), Err(expected.clone()));
        assert_eq!(replacer.mark_non_evictable(fid(2)), Err(expected.clone()));
        assert_eq!(replacer.is_evictable(fid(2)), Err(expected));

        assert_eq!(replacer.size(), 1);
        assert_eq!(order(&replacer), vec![1]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut replacer = LruReplacer::new(0);
        assert_eq!(replacer.capacity(), 0);
        assert!(replacer.mark_evictable(fid(0)).is_err());
        assert_eq!(replacer.evict(), None);
    }

    #[test]
    fn test_with_config() {
        let replacer = LruReplacer::with_config(&ReplacerConfig::new(8)).unwrap();
        assert_eq!(replacer.capacity(), 8);

        let err = LruReplacer::with_config(&ReplacerConfig::new(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_iter_exact_size() {
        let mut replacer = LruReplacer::new(4);
        replacer.mark_evictable(fid(3)).unwrap();
        replacer.mark_evictable(fid(1)).unwrap();

        let mut iter = replacer.iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(fid(1)));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(fid(3)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let collected: Vec<FrameId> = (&replacer).into_iter().collect();
        assert_eq!(collected, vec![fid(1), fid(3)]);
    }

    #[test]
    fn test_default_capacity() {
        let replacer = LruReplacer::default();
        assert_eq!(
            replacer.capacity(),
            crate::common::config::DEFAULT_POOL_SIZE
        );
    }
}
