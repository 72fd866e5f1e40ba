//! Error types for the van Emde Boas tree.
//!
//! The tree has exactly one fallible edge: growing the universe past what
//! fits in a `u64`. Every other operation (`contains`, `discard`,
//! `predecessor`, `successor`, `min`, `max`) is infallible by construction.

use thiserror::Error;

/// Errors produced by the fallible `try_add`/`try_grow` entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VebError {
    /// The requested universe size does not fit in a `u64`-backed tree.
    #[error("universe size {requested} exceeds the maximum representable size (2^63)")]
    UniverseTooLarge {
        /// The universe size that was requested.
        requested: u64,
    },

    /// The value is too large to ever be inserted, regardless of growth.
    #[error("value {value} exceeds the maximum representable element (2^63 - 1)")]
    ValueTooLarge {
        /// The value that was rejected.
        value: u64,
    },
}

/// A specialized `Result` for fallible tree operations.
pub type Result<T> = core::result::Result<T, VebError>;
