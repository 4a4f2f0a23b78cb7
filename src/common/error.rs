//! Error types for the replacer.

use thiserror::Error;

use super::FrameId;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller.
///
/// An empty replacer is not an error: `evict()` reports it as `None`.
/// Pinning or unpinning a frame twice is not an error either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The frame id is outside `[0, capacity)`.
    ///
    /// The replacer state is left unchanged.
    #[error("{frame_id} is out of range for a replacer with capacity {capacity}")]
    FrameOutOfRange { frame_id: FrameId, capacity: usize },

    /// A [`ReplacerConfig`](super::ReplacerConfig) failed validation.
    #[error("invalid replacer config: {0}")]
    InvalidConfig(String),
}
