use super::{PeerId, VertexId};

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("peer {0} not found in graph")]
    PeerNotFound(PeerId),
    #[error("vertex attribute not found for vertex {0}")]
    VertexNotFound(VertexId),
    #[error("{0}")]
    InternalError(String),
}
