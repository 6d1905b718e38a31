use serde::{Deserialize, Serialize};

/// How edge weights are assigned. The interface accepts values beyond
/// `Unit` for forward compatibility, per the `edgeWeightPolicy` configuration
/// key, even though only `Unit` is implemented today (non-unit weighting is
/// a stated Non-goal).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeWeightPolicy {
    /// Every edge costs exactly 1; hop count and cumulative cost coincide.
    #[default]
    Unit,
    /// Reserved. Edge weights would come from transport-specific latency or
    /// another per-edge measure; not implemented.
    Weighted,
}
