//! Buffer pool support.
//!
//! Only the eviction side of the buffer pool lives here; frames, the
//! page table and disk I/O belong to the buffer pool manager that
//! drives the [`replacer`].

pub mod replacer;

pub use replacer::{LruReplacer, Replacer, SharedReplacer};
