//! Zumic - a compact, cache-friendly, doubly-ended string list container.
//!
//! Main modules:
//! - `varint` — forward/reverse base-128 varint codec underlying entry framing
//! - `pool` — size-classed recycling pool for node byte buffers
//! - `config` — tunables for node sizing
//! - `error` — error types for the fatal cases (corrupt input, codec failure)
//! - `database::listpack` — a single packed, contiguous entry segment
//! - `database::quicklist` — a doubly-linked chain of listpack segments,
//!   with a concurrency wrapper and binary (de)serialization

/// Forward/reverse varint codec.
pub mod varint;

/// Size-classed recycling pool for node byte buffers.
pub mod pool;

/// Tunables for node sizing.
pub mod config;

/// Error types for the fatal, non-silent failure cases.
pub mod error;

/// Core data structures: `ListPack` and `QuickList`.
pub mod database;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Configuration type.
pub use config::QuickListConfig;

/// Error types.
pub use error::{QuickListError, Result};

/// Data structures.
pub use database::{ConcurrentQuickList, ListPack, QuickList};
