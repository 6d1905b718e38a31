use super::Hop;
use serde::Serialize;

/// An ordered, non-empty sequence of [`Hop`]s from a source peer to a
/// destination peer, plus the cumulative cost search assigned to it.
///
/// A zero-hop route (source == destination, requested with `min_hops == 0`)
/// is represented by an empty `hops` vector. "Non-empty" above describes the
/// common case, not an invariant this type enforces; `RouteEngine` is the
/// layer that only ever produces one such route.
#[derive(Clone, Debug, Serialize)]
pub struct Route {
    pub hops: Vec<Hop>,
    pub cost: u32,
}

impl Route {
    pub fn new(hops: Vec<Hop>, cost: u32) -> Self {
        Self { hops, cost }
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }
}
