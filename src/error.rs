//! Error types for the list container.
//!
//! Grounded on `src/error/system.rs`'s shape (a single flat
//! `thiserror::Error` enum) rather than the full `zumic-error` machinery
//! built for a networked server surface (status codes, client-facing
//! messages, metrics tags) — this crate has no such surface, so only the
//! plain derive is carried forward.
//!
//! Most of what looks like a failure here isn't one: out-of-range indices
//! and pops on an empty list are `Option`/`bool` results, never a
//! `Result`. [`QuickListError`] exists only for the two genuinely fatal
//! cases: corrupt serialized input, and a codec failure while
//! decompressing a node.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuickListError>;

#[derive(Error, Debug)]
pub enum QuickListError {
    /// Truncated or inconsistent bytes encountered during `unmarshal`.
    #[error("serialized quicklist is out of range or truncated: {0}")]
    OutOfRange(String),

    /// The compression codec failed to decompress a node's buffer. The
    /// node remains in `Compressed` state.
    #[error("failed to decompress listpack node: {0}")]
    CompressionFailure(String),
}
