mod edge;
mod graph;
mod network_error;
mod peer_id;
mod transport_id;
mod vertex;
mod vertex_id;

pub use edge::{Edge, PeerEdge};
pub use graph::Graph;
pub use network_error::NetworkError;
pub use peer_id::PeerId;
pub use transport_id::TransportId;
pub use vertex::Vertex;
pub use vertex_id::VertexId;
