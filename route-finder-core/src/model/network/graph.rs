use super::{Edge, NetworkError, PeerEdge, PeerId, TransportId, Vertex, VertexId};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Directed adjacency over a set of peers, indexed by [`PeerId`].
///
/// Construction is atomic: a `Graph` is built in one pass from a snapshot of
/// transports (see [`Graph::from_snapshot`]) and is immutable for the
/// remainder of its lifetime. Any number of searches may hold and read the
/// same `Graph` concurrently; none of its methods take `&mut self`.
#[derive(Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<PeerId, VertexId>,
}

impl Graph {
    /// Builds a `Graph` from a snapshot of `(from, to, transport, weight)`
    /// tuples, such as `TransportStore::snapshot_edges()` yields. Parallel
    /// edges between the same ordered pair collapse to the first one seen;
    /// later duplicates are logged and dropped, mirroring "the store
    /// resolves to one" from the edge invariant.
    pub fn from_snapshot<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = PeerEdge>,
    {
        let mut index: HashMap<PeerId, VertexId> = HashMap::new();
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut out_edges: Vec<IndexMap<PeerId, (TransportId, u32)>> = Vec::new();

        fn vertex_id_for(
            peer: PeerId,
            index: &mut HashMap<PeerId, VertexId>,
            vertices: &mut Vec<Vertex>,
            out_edges: &mut Vec<IndexMap<PeerId, (TransportId, u32)>>,
        ) -> VertexId {
            if let Some(id) = index.get(&peer) {
                return *id;
            }
            let id = VertexId(vertices.len());
            vertices.push(Vertex::new(id, peer));
            out_edges.push(IndexMap::new());
            index.insert(peer, id);
            id
        }

        for pe in edges {
            let src_id = vertex_id_for(pe.from, &mut index, &mut vertices, &mut out_edges);
            let _dst_id = vertex_id_for(pe.to, &mut index, &mut vertices, &mut out_edges);

            let neighbors = &mut out_edges[src_id.0];
            if neighbors.contains_key(&pe.to) {
                log::warn!(
                    "dropping duplicate transport {} for edge {} -> {}: one already registered",
                    pe.transport_id,
                    pe.from,
                    pe.to
                );
                continue;
            }
            neighbors.insert(pe.to, (pe.transport_id, pe.weight));
        }

        for (src_id, neighbors) in out_edges.into_iter().enumerate() {
            for (dst_peer, (transport_id, weight)) in neighbors {
                let dst_id = index[&dst_peer];
                let edge = Edge::new(VertexId(src_id), dst_id, transport_id, weight);
                vertices[src_id].insert_edge(dst_peer, edge);
            }
        }

        Self { vertices, index }
    }

    /// Constant-time lookup from external peer identity to internal vertex
    /// handle.
    pub fn lookup(&self, peer: PeerId) -> Result<VertexId, NetworkError> {
        self.index
            .get(&peer)
            .copied()
            .ok_or(NetworkError::PeerNotFound(peer))
    }

    pub fn get_vertex(&self, vertex_id: VertexId) -> Result<&Vertex, NetworkError> {
        self.vertices
            .get(vertex_id.0)
            .ok_or(NetworkError::VertexNotFound(vertex_id))
    }

    /// Outgoing `(neighbor, transport, weight)` triples for `vertex`, in the
    /// deterministic order the snapshot inserted them — the ordering that
    /// makes tied-cost routes reproducible.
    pub fn neighbors_of(
        &self,
        vertex_id: VertexId,
    ) -> Result<impl Iterator<Item = (VertexId, TransportId, u32)> + '_, NetworkError> {
        let vertex = self.get_vertex(vertex_id)?;
        Ok(vertex.out_edges().map(|e| (e.dst, e.transport_id, e.weight)))
    }

    /// Looks up the edge between two adjacent vertices, re-querying (rather
    /// than caching) the transport used so the predecessor table used by
    /// search never needs to carry it.
    pub fn get_edge(&self, src: VertexId, dst: VertexId) -> Result<&Edge, NetworkError> {
        let src_vertex = self.get_vertex(src)?;
        src_vertex.out_edges().find(|e| e.dst == dst).ok_or_else(|| {
            NetworkError::InternalError(format!("no edge from {src} to {dst} at reconstruction time"))
        })
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }
}
