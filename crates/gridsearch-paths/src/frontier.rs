use std::collections::BinaryHeap;

/// Priority-queue entry: `(cost, seq, idx)` compared purely by value.
///
/// `seq` is the insertion sequence, so equal costs pop in FIFO order and the
/// cell index never decides the order in practice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) cost: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with lazy deletion.
///
/// A cell whose cost improves is pushed again instead of updated in place.
/// Callers skip the outdated entries on pop by checking their own closed
/// set, so no separate membership set is kept.
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl PriorityFrontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, cost: i32) {
        self.heap.push(NodeRef {
            cost,
            seq: self.seq,
            idx,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
