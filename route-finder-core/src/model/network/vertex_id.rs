use std::fmt::Display;

/// Internal index into a [`Graph`](super::Graph)'s vertex table. Stable for
/// the lifetime of one `Graph`, never exposed across a `find_routes` call
/// boundary.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
