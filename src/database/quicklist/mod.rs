//! `QuickList` — a doubly-linked chain of [`ListPack`] nodes providing
//! O(1) amortized push/pop at either end, bounded per-node size, and
//! logical indexing across the whole chain.
//!
//! Nodes live in a slab (`Vec<Option<Node>>`) addressed by index rather
//! than behind `Rc<RefCell<_>>` — a chain with one exclusive owner doesn't
//! need reference counting, just a stable index. `prev`/`next` are plain
//! `usize` slot indices; a freed slot is recycled from `free_slots` so the
//! slab never grows unboundedly under a long-lived push/pop workload.

pub mod concurrent;
pub mod serialize;

use crate::{config::QuickListConfig, database::listpack::ListPack, pool::BufferPool};

struct Node {
    listpack: ListPack,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked chain of `ListPack` segments.
pub struct QuickList {
    slots: Vec<Option<Node>>,
    free_slots: Vec<usize>,
    head: usize,
    tail: usize,
    config: QuickListConfig,
    pool: BufferPool,
}

/// Result of locating a logical index within the chain: which node holds
/// it and the index local to that node.
struct Found {
    node: usize,
    local_index: usize,
}

impl QuickList {
    pub fn new() -> Self {
        Self::with_config(QuickListConfig::default())
    }

    pub fn with_config(config: QuickListConfig) -> Self {
        let pool = BufferPool::new();
        let root = Node {
            listpack: ListPack::from_raw_parts(0, pool.get(config.default_listpack_cap)),
            prev: None,
            next: None,
        };
        Self {
            slots: vec![Some(root)],
            free_slots: Vec::new(),
            head: 0,
            tail: 0,
            config,
            pool,
        }
    }

    fn node(
        &self,
        idx: usize,
    ) -> &Node {
        self.slots[idx].as_ref().expect("dangling slab index")
    }

    fn node_mut(
        &mut self,
        idx: usize,
    ) -> &mut Node {
        self.slots[idx].as_mut().expect("dangling slab index")
    }

    fn alloc_node(
        &mut self,
        listpack: ListPack,
    ) -> usize {
        let node = Node {
            listpack,
            prev: None,
            next: None,
        };
        if let Some(slot) = self.free_slots.pop() {
            self.slots[slot] = Some(node);
            slot
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    fn new_empty_node(&mut self) -> usize {
        let buf = self.pool.get(self.config.default_listpack_cap);
        let lp = ListPack::from_raw_parts(0, buf);
        self.alloc_node(lp)
    }

    /// Total entries across all nodes. No cache is kept; a full walk
    /// stays O(nodes), which is small compared to O(entries) for any
    /// realistic fan-out.
    pub fn total_size(&self) -> usize {
        let mut total = 0;
        let mut cur = Some(self.head);
        while let Some(idx) = cur {
            total += self.node(idx).listpack.len();
            cur = self.node(idx).next;
        }
        total
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.total_size()
    }

    pub fn is_empty(&self) -> bool {
        self.total_size() == 0
    }

    /// Walks head→tail accumulating node sizes; stops at the first node
    /// whose running total exceeds `index`.
    fn find(
        &self,
        index: usize,
    ) -> Option<Found> {
        let mut running = 0usize;
        let mut cur = Some(self.head);
        while let Some(idx) = cur {
            let size = self.node(idx).listpack.len();
            if index < running + size {
                return Some(Found {
                    node: idx,
                    local_index: index - running,
                });
            }
            running += size;
            cur = self.node(idx).next;
        }
        None
    }

    /// Unlinks `idx` iff it is empty and has both a predecessor and a
    /// successor; returns its buffer-backed storage to the pool. Head and
    /// tail are never reclaimed while they remain endpoints.
    fn reclaim_if_empty(
        &mut self,
        idx: usize,
    ) {
        let (is_empty, prev, next) = {
            let n = self.node(idx);
            (n.listpack.is_empty(), n.prev, n.next)
        };
        if !is_empty {
            return;
        }
        let (prev, next) = match (prev, next) {
            (Some(p), Some(n)) => (p, n),
            _ => return,
        };
        self.node_mut(prev).next = Some(next);
        self.node_mut(next).prev = Some(prev);
        let removed = self.slots[idx].take().expect("dangling slab index");
        self.pool.put(removed.listpack.into_raw_buffer());
        self.free_slots.push(idx);
    }

    /// Pushes `value` onto the front of the chain, splitting off a fresh
    /// head node first if the current head would exceed
    /// `max_listpack_size`.
    pub fn push_front(
        &mut self,
        value: &[u8],
    ) {
        self.warn_if_oversize(value);
        if self.node(self.head).listpack.byte_len() + value.len() >= self.config.max_listpack_size {
            let new_head = self.new_empty_node();
            self.node_mut(new_head).next = Some(self.head);
            self.node_mut(self.head).prev = Some(new_head);
            self.head = new_head;
        }
        self.node_mut(self.head).listpack.push_front(value);
    }

    /// Pushes `value` onto the back of the chain, symmetric to
    /// `push_front`.
    pub fn push_back(
        &mut self,
        value: &[u8],
    ) {
        self.warn_if_oversize(value);
        if self.node(self.tail).listpack.byte_len() + value.len() >= self.config.max_listpack_size {
            let new_tail = self.new_empty_node();
            self.node_mut(new_tail).prev = Some(self.tail);
            self.node_mut(self.tail).next = Some(new_tail);
            self.tail = new_tail;
        }
        self.node_mut(self.tail).listpack.push_back(value);
    }

    fn warn_if_oversize(
        &self,
        value: &[u8],
    ) {
        if value.len() >= self.config.max_listpack_size {
            tracing::warn!(
                len = value.len(),
                max = self.config.max_listpack_size,
                "pushed value exceeds max_listpack_size; storing it in its own node"
            );
        }
    }

    /// Pushes each value in order, left to right, onto the front — the
    /// last value in `values` ends up closest to the front.
    pub fn push_front_all<'a>(
        &mut self,
        values: impl IntoIterator<Item = &'a [u8]>,
    ) {
        for v in values {
            self.push_front(v);
        }
    }

    /// Pushes each value in order onto the back.
    pub fn push_back_all<'a>(
        &mut self,
        values: impl IntoIterator<Item = &'a [u8]>,
    ) {
        for v in values {
            self.push_back(v);
        }
    }

    /// Equivalent to `remove(0)`.
    pub fn pop_front(&mut self) -> Option<Vec<u8>> {
        self.remove(0)
    }

    /// Walks from `tail` toward `head` on a local cursor, reclaiming empty
    /// interior nodes in passing, and pops from the first non-empty node
    /// found. `self.tail` itself is never reassigned here; it only ever
    /// moves as part of a push-driven split. An emptied tail node stays
    /// put until a later push shifts it.
    pub fn pop_back(&mut self) -> Option<Vec<u8>> {
        let mut cur = Some(self.tail);
        while let Some(idx) = cur {
            let prev = self.node(idx).prev;
            if self.node(idx).listpack.is_empty() {
                self.reclaim_if_empty(idx);
                cur = prev;
                continue;
            }
            let popped = self.node_mut(idx).listpack.pop_back();
            self.reclaim_if_empty(idx);
            return popped;
        }
        None
    }

    /// Returns a copy of the payload at logical position `i`, delegating
    /// to the node that owns it.
    pub fn index(
        &self,
        i: usize,
    ) -> Option<Vec<u8>> {
        let found = self.find(i)?;
        self.node(found.node).listpack.get(found.local_index).map(|b| b.to_vec())
    }

    /// In-place rewrite at logical position `i`.
    pub fn set(
        &mut self,
        i: usize,
        value: &[u8],
    ) -> bool {
        match self.find(i) {
            Some(found) => self.node_mut(found.node).listpack.set(found.local_index, value),
            None => false,
        }
    }

    /// Removes and returns the payload at logical position `i`, then
    /// reclaims the owning node if it became empty.
    pub fn remove(
        &mut self,
        i: usize,
    ) -> Option<Vec<u8>> {
        let found = self.find(i)?;
        let removed = self.node_mut(found.node).listpack.remove(found.local_index);
        if removed.is_some() {
            self.reclaim_if_empty(found.node);
        }
        removed
    }

    /// Forward node walk: reclaims empty nodes in passing and delegates
    /// `remove_first_equal` to each node in turn, stopping on the first
    /// hit.
    pub fn remove_first_equal(
        &mut self,
        value: &[u8],
    ) -> bool {
        let mut cur = Some(self.head);
        while let Some(idx) = cur {
            let next = self.node(idx).next;
            if self.node_mut(idx).listpack.remove_first_equal(value) {
                self.reclaim_if_empty(idx);
                return true;
            }
            self.reclaim_if_empty(idx);
            cur = next;
        }
        false
    }

    /// Removes `count` consecutive logical entries starting at `start`.
    /// Returns the number of entries actually removed, which may be fewer
    /// than `count` if the list runs out first.
    pub fn remove_range(
        &mut self,
        start: usize,
        count: usize,
    ) -> usize {
        let mut removed = 0;
        for _ in 0..count {
            if self.remove(start).is_none() {
                break;
            }
            removed += 1;
        }
        removed
    }

    /// Forward walk from logical position `start` for up to `end - start`
    /// items; `end = None` means "to the end". Out-of-range starts
    /// (`start >= size`) are a no-op rather than a panic.
    pub fn range(
        &self,
        start: usize,
        end: Option<usize>,
        mut visitor: impl FnMut(&[u8]) -> bool,
    ) {
        let total = self.total_size();
        if start >= total {
            return;
        }
        let limit = end.unwrap_or(total).min(total);
        if start >= limit {
            return;
        }
        let found = match self.find(start) {
            Some(f) => f,
            None => return,
        };
        let mut remaining = limit - start;
        let mut node_idx = found.node;
        let mut local = found.local_index;
        loop {
            let lp = &self.node(node_idx).listpack;
            let mut stop = false;
            lp.iterate_forward(local, None, |payload, _, _| {
                if remaining == 0 {
                    stop = true;
                    return true;
                }
                remaining -= 1;
                let should_stop = visitor(payload);
                if should_stop {
                    stop = true;
                }
                remaining == 0 || should_stop
            });
            if stop || remaining == 0 {
                return;
            }
            match self.node(node_idx).next {
                Some(next) => {
                    node_idx = next;
                    local = 0;
                }
                None => return,
            }
        }
    }

    /// Backward walk starting at logical position `start` counted from
    /// the tail (`start = 0` is the last element), for up to
    /// `end - start` items.
    pub fn rev_range(
        &self,
        start: usize,
        end: Option<usize>,
        mut visitor: impl FnMut(&[u8]) -> bool,
    ) {
        let total = self.total_size();
        if start >= total {
            return;
        }
        let limit = end.unwrap_or(total).min(total);
        if start >= limit {
            return;
        }
        let forward_index = total - 1 - start;
        let found = match self.find(forward_index) {
            Some(f) => f,
            None => return,
        };
        let mut remaining = limit - start;
        let mut node_idx = found.node;
        let mut local_from_tail = self.node(node_idx).listpack.len() - 1 - found.local_index;
        loop {
            let lp = &self.node(node_idx).listpack;
            let mut stop = false;
            lp.iterate_backward(local_from_tail, None, |payload, _, _| {
                if remaining == 0 {
                    stop = true;
                    return true;
                }
                remaining -= 1;
                let should_stop = visitor(payload);
                if should_stop {
                    stop = true;
                }
                remaining == 0 || should_stop
            });
            if stop || remaining == 0 {
                return;
            }
            match self.node(node_idx).prev {
                Some(prev) => {
                    node_idx = prev;
                    local_from_tail = 0;
                }
                None => return,
            }
        }
    }

    /// Reference to the configuration this list was constructed with.
    pub fn config(&self) -> &QuickListConfig {
        &self.config
    }

    /// Binary-encodes the whole chain.
    pub fn marshal(&self) -> Vec<u8> {
        serialize::marshal(self)
    }

    /// Replaces this list's contents with the chain encoded in `bytes`.
    pub fn unmarshal(
        &mut self,
        bytes: &[u8],
    ) -> crate::error::Result<()> {
        *self = serialize::unmarshal(bytes)?;
        Ok(())
    }

    /// Number of live nodes in the chain, including empty endpoints.
    /// Exposed for tests asserting node-splitting behaviour.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut cur = Some(self.head);
        while let Some(idx) = cur {
            count += 1;
            cur = self.node(idx).next;
        }
        count
    }

    /// Maximum byte length of any single node's buffer. Exposed for tests
    /// asserting the per-node soft cap is respected.
    pub fn max_node_byte_len(&self) -> usize {
        let mut max = 0;
        let mut cur = Some(self.head);
        while let Some(idx) = cur {
            max = max.max(self.node(idx).listpack.byte_len());
            cur = self.node(idx).next;
        }
        max
    }
}

impl Default for QuickList {
    fn default() -> Self {
        Self::new()
    }
}
