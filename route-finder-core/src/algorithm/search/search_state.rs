use crate::model::network::VertexId;

/// One entry in the [`PriorityFrontier`](super::PriorityFrontier): a vertex
/// reached in exactly `hops` steps at cumulative `cost`.
///
/// `Ord` here is a tie-break only — the heap orders by the explicit
/// `(cost, hops, insertion order)` priority key `PriorityFrontier` attaches
/// to each push, which is already total, so this impl is never consulted to
/// break a real tie. It exists because the underlying heap's item type must
/// implement `Ord`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchState {
    pub vertex: VertexId,
    pub hops: usize,
    pub cost: u32,
}
