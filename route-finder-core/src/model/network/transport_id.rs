use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Identifies a single directed edge (a transport) between two peers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TransportId(pub Uuid);

impl TransportId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for TransportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
