use crate::model::network::VertexId;

/// A relaxation that reached the destination during search, pending
/// reconstruction into a [`Route`](crate::model::route::Route).
///
/// `predecessor` is `None` only for the zero-hop arrival produced when
/// source and destination coincide and `min_hops == 0` — every other
/// arrival records the vertex the destination was reached from.
#[derive(Copy, Clone, Debug)]
pub struct Arrival {
    pub cost: u32,
    pub hops: usize,
    pub predecessor: Option<VertexId>,
}
