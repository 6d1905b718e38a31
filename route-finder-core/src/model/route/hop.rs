use crate::model::network::{PeerId, TransportId};
use serde::Serialize;
use std::fmt::Display;

/// One edge traversal in a [`Route`](super::Route).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: PeerId,
    pub to: PeerId,
    pub transport_id: TransportId,
}

impl Display for Hop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.transport_id, self.to)
    }
}
