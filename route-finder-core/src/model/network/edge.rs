use super::{PeerId, TransportId, VertexId};
use serde::{Deserialize, Serialize};

/// A directed connection from one peer to another, carrying the transport
/// that implements it and an integer weight. Edges are immutable once
/// registered with a [`Graph`](super::Graph).
///
/// Weight is currently always `1` (see [`crate::config::EdgeWeightPolicy::Unit`]),
/// but is carried as a field rather than hardcoded so that non-unit
/// weighting can be introduced later without changing the `Edge` shape.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub src: VertexId,
    pub dst: VertexId,
    pub transport_id: TransportId,
    pub weight: u32,
}

impl Edge {
    pub fn new(src: VertexId, dst: VertexId, transport_id: TransportId, weight: u32) -> Self {
        Self {
            src,
            dst,
            transport_id,
            weight,
        }
    }
}

/// A source/destination pair of [`PeerId`]s, used only while building a
/// [`Graph`](super::Graph) from a transport snapshot, before peers are
/// resolved to [`VertexId`]s. Also the shape `TransportStore::snapshot_edges`
/// yields, so it carries `serde` support for use at that boundary.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct PeerEdge {
    pub from: PeerId,
    pub to: PeerId,
    pub transport_id: TransportId,
    pub weight: u32,
}
