use crate::algorithm::search::{Arrival, PredecessorTable, RouteFinderError};
use crate::model::network::{Graph, PeerId, VertexId};
use crate::model::route::{Hop, Route};
use crate::util::cancellation::CancellationSignal;
use itertools::Itertools;

/// Backtracks the predecessor chain of every satisfying [`Arrival`] into a
/// concrete, ordered [`Route`], re-querying `graph` for each hop's
/// `TransportId` rather than carrying it in the predecessor table.
///
/// `min_cost`/`max_cost` filter arrivals before reconstruction. The caller
/// currently passes the same bounds used as hop bounds inside search, which
/// is only safe because every edge weighs 1; the parameters are named
/// independently here so that splitting them once non-unit weights ship is
/// a call-site change, not a signature change.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct(
    graph: &Graph,
    arrivals: Vec<Arrival>,
    predecessors: &PredecessorTable,
    source: VertexId,
    destination: VertexId,
    source_peer: PeerId,
    destination_peer: PeerId,
    min_cost: u32,
    max_cost: u32,
    n: usize,
    cancel: &dyn CancellationSignal,
) -> Result<Vec<Route>, RouteFinderError> {
    let sorted = arrivals
        .into_iter()
        .sorted_by(|a, b| a.cost.cmp(&b.cost).then(a.hops.cmp(&b.hops)));

    let mut routes = Vec::new();
    for arrival in sorted {
        if routes.len() >= n {
            break;
        }
        if cancel.is_cancelled() {
            return Err(RouteFinderError::Cancelled);
        }
        if arrival.cost < min_cost || arrival.cost > max_cost {
            continue;
        }
        routes.push(reconstruct_one(
            graph,
            source,
            destination,
            predecessors,
            &arrival,
        )?);
    }

    if routes.is_empty() {
        return Err(RouteFinderError::NoRoute(
            source_peer,
            destination_peer,
            max_cost as usize,
        ));
    }
    Ok(routes)
}

fn reconstruct_one(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
    predecessors: &PredecessorTable,
    arrival: &Arrival,
) -> Result<Route, RouteFinderError> {
    if arrival.hops == 0 {
        return Ok(Route::new(Vec::new(), arrival.cost));
    }

    let mut hops = Vec::with_capacity(arrival.hops);
    let mut to_vertex = destination;
    let mut to_hops = arrival.hops;
    let mut from_vertex = arrival.predecessor.ok_or_else(|| {
        RouteFinderError::InternalInvariantViolation(
            "non-zero-hop arrival with no predecessor".to_string(),
        )
    })?;

    loop {
        let edge = graph.get_edge(from_vertex, to_vertex)?;
        hops.push(Hop {
            from: graph.get_vertex(from_vertex)?.peer_id,
            to: graph.get_vertex(to_vertex)?.peer_id,
            transport_id: edge.transport_id,
        });

        to_hops -= 1;
        if to_hops == 0 {
            if from_vertex != source {
                return Err(RouteFinderError::InternalInvariantViolation(
                    "predecessor chain terminated before reaching the source".to_string(),
                ));
            }
            break;
        }

        to_vertex = from_vertex;
        from_vertex = *predecessors.get(&(from_vertex, to_hops)).ok_or_else(|| {
            RouteFinderError::InternalInvariantViolation(format!(
                "predecessor chain broke at vertex {from_vertex} hop {to_hops}"
            ))
        })?;
    }

    hops.reverse();
    Ok(Route::new(hops, arrival.cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::search::search;
    use crate::model::network::{PeerEdge, TransportId};
    use crate::util::cancellation::NeverCancelled;
    use uuid::Uuid;

    fn peer(byte: u8) -> PeerId {
        PeerId::from_bytes([byte; 32])
    }

    fn edge(from: u8, to: u8) -> PeerEdge {
        PeerEdge {
            from: peer(from),
            to: peer(to),
            transport_id: TransportId::new(Uuid::new_v4()),
            weight: 1,
        }
    }

    #[test]
    fn s1_two_routes_ordered_by_ascending_cost() {
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(2, 3), edge(1, 3)]);
        let a = graph.lookup(peer(1)).unwrap();
        let c = graph.lookup(peer(3)).unwrap();
        let (arrivals, preds) =
            search(&graph, a, c, peer(1), peer(3), 1, 2, 1024, &NeverCancelled).unwrap();
        let routes = reconstruct(
            &graph,
            arrivals,
            &preds,
            a,
            c,
            peer(1),
            peer(3),
            1,
            2,
            10,
            &NeverCancelled,
        )
        .unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].cost, 1);
        assert_eq!(routes[0].hop_count(), 1);
        assert_eq!(routes[1].cost, 2);
        assert_eq!(routes[1].hop_count(), 2);
        assert_eq!(routes[0].hops[0].from, peer(1));
        assert_eq!(routes[0].hops[0].to, peer(3));
        assert_eq!(routes[1].hops[0].from, peer(1));
        assert_eq!(routes[1].hops[0].to, peer(2));
        assert_eq!(routes[1].hops[1].from, peer(2));
        assert_eq!(routes[1].hops[1].to, peer(3));
    }

    #[test]
    fn s5_equal_cost_routes_keep_deterministic_neighbor_order() {
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(1, 3), edge(2, 4), edge(3, 4)]);
        let a = graph.lookup(peer(1)).unwrap();
        let d = graph.lookup(peer(4)).unwrap();
        let (arrivals, preds) =
            search(&graph, a, d, peer(1), peer(4), 1, 3, 1024, &NeverCancelled).unwrap();
        let routes = reconstruct(
            &graph,
            arrivals,
            &preds,
            a,
            d,
            peer(1),
            peer(4),
            1,
            3,
            10,
            &NeverCancelled,
        )
        .unwrap();
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.cost == 2));
        assert_eq!(routes[0].hops[0].to, peer(2));
        assert_eq!(routes[1].hops[0].to, peer(3));
    }

    #[test]
    fn stops_once_n_routes_are_collected() {
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(1, 3), edge(2, 4), edge(3, 4)]);
        let a = graph.lookup(peer(1)).unwrap();
        let d = graph.lookup(peer(4)).unwrap();
        let (arrivals, preds) =
            search(&graph, a, d, peer(1), peer(4), 1, 3, 1024, &NeverCancelled).unwrap();
        let routes = reconstruct(
            &graph,
            arrivals,
            &preds,
            a,
            d,
            peer(1),
            peer(4),
            1,
            3,
            1,
            &NeverCancelled,
        )
        .unwrap();
        assert_eq!(routes.len(), 1);
    }

    #[test]
    fn zero_hop_arrival_reconstructs_to_an_empty_route() {
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(2, 1)]);
        let a = graph.lookup(peer(1)).unwrap();
        let (arrivals, preds) =
            search(&graph, a, a, peer(1), peer(1), 0, 0, 1024, &NeverCancelled).unwrap();
        let routes = reconstruct(
            &graph,
            arrivals,
            &preds,
            a,
            a,
            peer(1),
            peer(1),
            0,
            0,
            1,
            &NeverCancelled,
        )
        .unwrap();
        assert_eq!(routes.len(), 1);
        assert!(routes[0].hops.is_empty());
        assert_eq!(routes[0].cost, 0);
    }
}
