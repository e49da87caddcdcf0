//! Binary marshal/unmarshal for a whole [`QuickList`].
//!
//! Format: a concatenation of node records, each
//! `[node_size: u32 LE][data_len: u32 LE][data bytes]`. No version byte,
//! no magic; a version byte only earns its keep once a second wire format
//! actually exists to distinguish from.

use super::{Node, QuickList};
use crate::{
    database::listpack::ListPack,
    error::{QuickListError, Result},
};

const HEADER_LEN: usize = 8;

/// Walks `head..=tail`, skipping empty nodes, and emits one record per
/// remaining node.
pub fn marshal(list: &QuickList) -> Vec<u8> {
    let mut out = Vec::new();
    let mut cur = Some(list.head);
    while let Some(idx) = cur {
        let node = list.node(idx);
        if node.listpack.len() > 0 {
            let data = node.listpack.raw_bytes();
            out.extend_from_slice(&(node.listpack.len() as u32).to_le_bytes());
            out.extend_from_slice(&(data.len() as u32).to_le_bytes());
            out.extend_from_slice(data);
        }
        cur = node.next;
    }
    out
}

/// Replaces the list's contents by reading records until `bytes` is
/// exhausted. Fails with `OutOfRange` if fewer than 8 header bytes remain
/// at a record boundary, or if `data_len` exceeds the remaining input.
pub fn unmarshal(bytes: &[u8]) -> Result<QuickList> {
    let config = crate::config::QuickListConfig::default();
    let pool = crate::pool::BufferPool::new();
    let mut list = QuickList {
        slots: Vec::new(),
        free_slots: Vec::new(),
        head: 0,
        tail: 0,
        config,
        pool,
    };

    let mut pos = 0usize;
    let mut prev_idx: Option<usize> = None;
    let mut first_idx: Option<usize> = None;

    while pos < bytes.len() {
        if bytes.len() - pos < HEADER_LEN {
            return Err(QuickListError::OutOfRange(format!(
                "expected {HEADER_LEN} header bytes at offset {pos}, found {}",
                bytes.len() - pos
            )));
        }
        let node_size = u32::from_le_bytes(bytes[pos..pos + 4].try_into().unwrap());
        let data_len = u32::from_le_bytes(bytes[pos + 4..pos + 8].try_into().unwrap()) as usize;
        pos += HEADER_LEN;

        if data_len > bytes.len() - pos {
            return Err(QuickListError::OutOfRange(format!(
                "record at offset {pos} declares data_len {data_len} but only {} bytes remain",
                bytes.len() - pos
            )));
        }
        let data = bytes[pos..pos + data_len].to_vec();
        pos += data_len;

        let listpack = ListPack::from_raw_parts(node_size, data);
        let idx = list.slots.len();
        list.slots.push(Some(Node {
            listpack,
            prev: prev_idx,
            next: None,
        }));
        if let Some(p) = prev_idx {
            list.node_mut(p).next = Some(idx);
        }
        if first_idx.is_none() {
            first_idx = Some(idx);
        }
        prev_idx = Some(idx);
    }

    match (first_idx, prev_idx) {
        (Some(head), Some(tail)) => {
            list.head = head;
            list.tail = tail;
        }
        _ => {
            let buf = list.pool.get(list.config.default_listpack_cap);
            list.slots.push(Some(Node {
                listpack: ListPack::from_raw_parts(0, buf),
                prev: None,
                next: None,
            }));
            list.head = 0;
            list.tail = 0;
        }
    }
    Ok(list)
}

/// Like [`unmarshal`], but additionally walks each reconstructed node's
/// entries and verifies the walk yields exactly `node_size` entries and
/// terminates exactly at the buffer's end. Worth the extra pass whenever
/// the input isn't already trusted.
pub fn unmarshal_validated(bytes: &[u8]) -> Result<QuickList> {
    let list = unmarshal(bytes)?;
    let mut cur = Some(list.head);
    while let Some(idx) = cur {
        let node = list.node(idx);
        let mut count = 0usize;
        let mut consumed = 0usize;
        node.listpack.iterate_forward(0, None, |_, _, end| {
            count += 1;
            consumed = end;
            false
        });
        if count != node.listpack.len() || consumed != node.listpack.byte_len() {
            return Err(QuickListError::OutOfRange(format!(
                "node at slab index {idx} declares size {} but forward walk found {count} entries consuming {consumed} of {} bytes",
                node.listpack.len(),
                node.listpack.byte_len()
            )));
        }
        cur = node.next;
    }
    Ok(list)
}
