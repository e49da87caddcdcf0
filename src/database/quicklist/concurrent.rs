//! A single reader/writer lock guarding an entire [`QuickList`].
//!
//! Grounded on `database/skiplist/concurrent.rs`'s `ConcurrentSkipList`
//! shape: an `Arc<RwLock<_>>` around the whole structure, read operations
//! taking a shared guard and mutating operations taking an exclusive one.
//! Unlike that wrapper, no cached length or contention metrics are kept —
//! one lock is enough here, and `QuickList::size` is already an
//! O(nodes) walk cheap enough not to need caching.

use std::sync::{Arc, RwLock};

use super::QuickList;
use crate::config::QuickListConfig;

/// Thread-safe handle to a `QuickList`. Cloning shares the same
/// underlying list; all operations funnel through one `RwLock`.
#[derive(Clone)]
pub struct ConcurrentQuickList {
    inner: Arc<RwLock<QuickList>>,
}

impl ConcurrentQuickList {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(QuickList::new())),
        }
    }

    pub fn with_config(config: QuickListConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(QuickList::with_config(config))),
        }
    }

    pub fn push_front(
        &self,
        value: &[u8],
    ) {
        self.inner.write().unwrap().push_front(value);
    }

    pub fn push_back(
        &self,
        value: &[u8],
    ) {
        self.inner.write().unwrap().push_back(value);
    }

    pub fn pop_front(&self) -> Option<Vec<u8>> {
        self.inner.write().unwrap().pop_front()
    }

    pub fn pop_back(&self) -> Option<Vec<u8>> {
        self.inner.write().unwrap().pop_back()
    }

    pub fn index(
        &self,
        i: usize,
    ) -> Option<Vec<u8>> {
        self.inner.read().unwrap().index(i)
    }

    pub fn set(
        &self,
        i: usize,
        value: &[u8],
    ) -> bool {
        self.inner.write().unwrap().set(i, value)
    }

    pub fn remove(
        &self,
        i: usize,
    ) -> Option<Vec<u8>> {
        self.inner.write().unwrap().remove(i)
    }

    pub fn remove_first_equal(
        &self,
        value: &[u8],
    ) -> bool {
        self.inner.write().unwrap().remove_first_equal(value)
    }

    pub fn remove_range(
        &self,
        start: usize,
        count: usize,
    ) -> usize {
        self.inner.write().unwrap().remove_range(start, count)
    }

    /// Read-only: acquires the shared guard for the duration of the
    /// visitor call, so the visitor runs with the lock held.
    pub fn range(
        &self,
        start: usize,
        end: Option<usize>,
        visitor: impl FnMut(&[u8]) -> bool,
    ) {
        self.inner.read().unwrap().range(start, end, visitor);
    }

    pub fn rev_range(
        &self,
        start: usize,
        end: Option<usize>,
        visitor: impl FnMut(&[u8]) -> bool,
    ) {
        self.inner.read().unwrap().rev_range(start, end, visitor);
    }

    pub fn size(&self) -> usize {
        self.inner.read().unwrap().size()
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.inner.read().unwrap().marshal()
    }

    pub fn unmarshal(
        &self,
        bytes: &[u8],
    ) -> crate::error::Result<()> {
        self.inner.write().unwrap().unmarshal(bytes)
    }
}

impl Default for ConcurrentQuickList {
    fn default() -> Self {
        Self::new()
    }
}
