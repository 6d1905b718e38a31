use super::SearchState;
use crate::util::priority_queue::InternalPriorityQueue;

/// A min-heap of [`SearchState`]s ordered by cost ascending, ties broken by
/// hop count ascending, further ties broken by insertion order.
///
/// Superseded entries are never removed from the middle of the heap; a
/// caller that maintains a BestCost table discards a popped state by
/// comparing its cost against the table before acting on it (lazy
/// deletion), which is cheaper than a decrease-key-capable heap and, unlike
/// one, tolerates the same vertex being pushed again at a different hop
/// count.
pub struct PriorityFrontier {
    heap: InternalPriorityQueue<SearchState, (u32, usize, u64)>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            heap: InternalPriorityQueue::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, state: SearchState) {
        let priority = (state.cost, state.hops, self.next_seq);
        self.next_seq += 1;
        self.heap.push(state, priority);
    }

    pub fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|(state, _priority)| state)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}
