//! Min-cost frontier for the flood.
//!
//! A binary heap ordered by tentative cost, then by discovery sequence, so
//! equal-cost cells settle in the order they were first pushed. Stale
//! entries (a cell pushed again with a lower cost) are left in the heap and
//! skipped by the caller on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: f32,
    seq: u64,
    index: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed on both keys: `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority frontier reused across turns; `clear` keeps the allocation.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, index: usize, cost: f32) {
        self.heap.push(Entry {
            cost,
            seq: self.next_seq,
            index,
        });
        self.next_seq += 1;
    }

    /// Lowest-cost entry as `(index, cost)`.
    pub(crate) fn pop(&mut self) -> Option<(usize, f32)> {
        self.heap.pop().map(|e| (e.index, e.cost))
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
