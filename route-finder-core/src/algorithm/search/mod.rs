mod arrival;
mod dijkstra_search;
mod priority_frontier;
mod search_error;
mod search_state;

pub use arrival::Arrival;
pub use dijkstra_search::search;
pub use priority_frontier::PriorityFrontier;
pub use search_error::RouteFinderError;
pub use search_state::SearchState;

use crate::model::network::VertexId;
use std::collections::HashMap;

/// `(vertex, hops) -> predecessor vertex`, populated in lockstep with the
/// BestCost table during [`search`] and consulted only during
/// reconstruction. Per-search, not shared across searches.
pub type PredecessorTable = HashMap<(VertexId, usize), VertexId>;
