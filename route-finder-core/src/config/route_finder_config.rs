use super::EdgeWeightPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration recognized by the core. `route-finder`'s application layer
/// is responsible for loading this from layered defaults/file/environment
/// sources (the `config` crate); this crate only defines the shape and the
/// defaults.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteFinderConfig {
    /// How long a built `Graph` snapshot may be used before a refresh is due.
    #[serde(with = "duration_secs")]
    pub max_graph_build_staleness: Duration,
    /// Hard upper bound for `max_hops` in any request; requests above this
    /// are rejected as `InvalidRequest` without exploring.
    pub max_search_hops: usize,
    /// Caps the number of recorded arrivals per search, bounding memory
    /// independent of `n`.
    pub max_arrivals_per_search: usize,
    /// Hard ceiling on `|V| * (max_hops + 1)`, the size of the BestCost and
    /// Predecessor tables a single search allocates. Fixed independently of
    /// `max_search_hops`, per §5's "configured ceiling to prevent
    /// denial-of-service": a request is rejected once its own state table
    /// would exceed this, regardless of how large `max_search_hops` itself
    /// is set to.
    pub max_state_table_size: usize,
    pub edge_weight_policy: EdgeWeightPolicy,
}

impl Default for RouteFinderConfig {
    fn default() -> Self {
        Self {
            max_graph_build_staleness: Duration::from_secs(60),
            max_search_hops: 16,
            max_arrivals_per_search: 1024,
            max_state_table_size: 1_000_000,
            edge_weight_policy: EdgeWeightPolicy::Unit,
        }
    }
}

impl RouteFinderConfig {
    /// `|V| * (max_hops + 1)` state-table entries. A request whose product
    /// exceeds this is rejected up front.
    pub fn state_table_ceiling(&self) -> usize {
        self.max_state_table_size
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_secs().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(d)?;
        Ok(Duration::from_secs(secs))
    }
}
