//! An LRU frame replacer for buffer pool managers.
//!
//! The replacer tracks which frames of a fixed-size buffer pool may be
//! reclaimed, and picks the one that was unpinned longest ago.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │               BufferPoolManager (caller)            │
//! │   pin ──────▶ mark_non_evictable(frame_id)          │
//! │   unpin ────▶ mark_evictable(frame_id)              │
//! │   need frame ▶ evict() -> Option<FrameId>           │
//! └─────────────────────────────────────────────────────┘
//!                          ↓
//! ┌─────────────────────────────────────────────────────┐
//! │   SharedReplacer (parking_lot::Mutex)               │
//! │   ┌─────────────────────────────────────────────┐   │
//! │   │ LruReplacer: eviction order + slot index    │   │
//! │   └─────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (FrameId, Error, config)
//! - [`buffer`] - Replacement policies
//!
//! # Quick Start
//! ```
//! use lru_replacer::{FrameId, LruReplacer};
//!
//! let mut replacer = LruReplacer::new(3);
//! for i in 0..3 {
//!     replacer.mark_evictable(FrameId::new(i)).unwrap();
//! }
//!
//! // Frame 0 was unpinned first, so it goes first.
//! assert_eq!(replacer.evict(), Some(FrameId::new(0)));
//! ```

pub mod buffer;
pub mod common;

pub use buffer::replacer::{LruReplacer, Replacer, SharedReplacer};
pub use common::config::DEFAULT_POOL_SIZE;
pub use common::{Error, FrameId, ReplacerConfig, Result};
