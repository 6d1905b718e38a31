use super::{Edge, PeerId, VertexId};
use indexmap::IndexMap;
use std::fmt::Display;

/// A node in a [`Graph`](super::Graph): a peer identity plus its outgoing
/// edges, keyed by neighbor [`PeerId`] in insertion order. At most one edge
/// exists per ordered `(this, neighbor)` pair — parallel edges are collapsed
/// before a `Vertex` is built (see [`Graph::from_snapshot`](super::Graph::from_snapshot)).
#[derive(Clone, Debug)]
pub struct Vertex {
    pub vertex_id: VertexId,
    pub peer_id: PeerId,
    out_edges: IndexMap<PeerId, Edge>,
}

impl Vertex {
    pub fn new(vertex_id: VertexId, peer_id: PeerId) -> Self {
        Self {
            vertex_id,
            peer_id,
            out_edges: IndexMap::new(),
        }
    }

    /// Registers an outgoing edge to `neighbor`. Returns the previously
    /// registered edge, if any (the caller decides whether that constitutes
    /// a duplicate transport to drop).
    pub fn insert_edge(&mut self, neighbor: PeerId, edge: Edge) -> Option<Edge> {
        self.out_edges.insert(neighbor, edge)
    }

    /// Outgoing edges in deterministic, insertion order — the order in
    /// which routes tie-broken on equal cost will be discovered.
    pub fn out_edges(&self) -> impl Iterator<Item = &Edge> {
        self.out_edges.values()
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex {} ({})", self.vertex_id, self.peer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::TransportId;
    use uuid::Uuid;

    fn peer(byte: u8) -> PeerId {
        PeerId::from_bytes([byte; 32])
    }

    #[test]
    fn out_edges_preserve_insertion_order() {
        let mut v = Vertex::new(VertexId(0), peer(1));
        let b = peer(2);
        let c = peer(3);
        v.insert_edge(
            c,
            Edge::new(VertexId(0), VertexId(2), TransportId::new(Uuid::nil()), 1),
        );
        v.insert_edge(
            b,
            Edge::new(VertexId(0), VertexId(1), TransportId::new(Uuid::nil()), 1),
        );
        let order: Vec<VertexId> = v.out_edges().map(|e| e.dst).collect();
        assert_eq!(order, vec![VertexId(2), VertexId(1)]);
    }

    #[test]
    fn reinserting_same_neighbor_collapses_to_one_edge() {
        let mut v = Vertex::new(VertexId(0), peer(1));
        let b = peer(2);
        v.insert_edge(
            b,
            Edge::new(VertexId(0), VertexId(1), TransportId::new(Uuid::nil()), 1),
        );
        v.insert_edge(
            b,
            Edge::new(VertexId(0), VertexId(1), TransportId::new(Uuid::nil()), 1),
        );
        assert_eq!(v.out_degree(), 1);
    }
}
