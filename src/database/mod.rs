//! Core data structures.
//!
//! - `listpack`: compact, contiguous packed-entry list segment.
//! - `quicklist`: doubly-linked chain of listpack segments, the logical
//!   container callers interact with.

pub mod listpack;
pub mod quicklist;

pub use listpack::ListPack;
pub use quicklist::{concurrent::ConcurrentQuickList, QuickList};
