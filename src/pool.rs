//! Size-classed recycling pool for the raw byte buffers backing
//! `ListPack` nodes.
//!
//! Purely a performance optimisation: correctness of `ListPack`/
//! `QuickList` never depends on whether [`BufferPool::get`] returns a
//! fresh allocation or a recycled one, only on the capacity promise.
//! Grounded on the lock-guarded shared-table shape of `pubsub/intern.rs`
//! (a `Lazy` static behind a mutex), adapted here from string interning
//! to buffer recycling, with size classes rounded up to the next power of
//! two so a modest number of free lists covers a wide range of requested
//! capacities.

use std::sync::Mutex;

/// A free list of byte buffers, bucketed by power-of-two size class.
///
/// `get`/`put` are the only two operations the rest of the crate consumes.
/// An empty or absent size class falls back to a fresh `Vec::with_capacity`,
/// which is itself a legal, correct `BufferPool`.
pub struct BufferPool {
    classes: Mutex<Vec<Vec<Vec<u8>>>>,
}

/// Number of size classes, covering capacities up to `2^(CLASSES-1)`.
const CLASSES: usize = 32;

impl BufferPool {
    pub fn new() -> Self {
        Self {
            classes: Mutex::new((0..CLASSES).map(|_| Vec::new()).collect()),
        }
    }

    fn class_for(min_cap: usize) -> usize {
        let cap = min_cap.max(1);
        (usize::BITS - (cap - 1).leading_zeros()) as usize
    }

    /// Returns a buffer with capacity at least `min_cap` and length 0.
    ///
    /// Prefers a recycled buffer from the matching size class; falls back
    /// to a fresh allocation when the class is empty.
    pub fn get(
        &self,
        min_cap: usize,
    ) -> Vec<u8> {
        let class = Self::class_for(min_cap).min(CLASSES - 1);
        let mut classes = self.classes.lock().unwrap();
        if let Some(mut buf) = classes[class].pop() {
            buf.clear();
            return buf;
        }
        Vec::with_capacity(min_cap)
    }

    /// Returns `buf` to the pool for future reuse.
    ///
    /// The pool may drop the buffer (e.g. once a size class is saturated)
    /// rather than retain it; callers must not rely on a subsequent `get`
    /// returning this exact allocation.
    pub fn put(
        &self,
        buf: Vec<u8>,
    ) {
        if buf.capacity() == 0 {
            return;
        }
        let class = Self::class_for(buf.capacity()).min(CLASSES - 1);
        let mut classes = self.classes.lock().unwrap();
        const MAX_PER_CLASS: usize = 64;
        if classes[class].len() < MAX_PER_CLASS {
            classes[class].push(buf);
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}
