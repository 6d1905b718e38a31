use super::{Arrival, PredecessorTable, PriorityFrontier, RouteFinderError, SearchState};
use crate::model::network::{Graph, PeerId, VertexId};
use crate::util::cancellation::CancellationSignal;
use std::collections::HashMap;

/// Hop-dimensional shortest-paths exploration: per-(vertex, hop-count) cost
/// tracking rather than the scalar-per-vertex distances classical Dijkstra
/// uses, so that routes of different lengths to the same vertex are never
/// collapsed into one.
///
/// `source` and `destination` are vertex handles already resolved against
/// `graph`; this function performs no peer lookups of its own. `source_peer`
/// and `destination_peer` are carried through only to label a possible
/// [`RouteFinderError::NoRoute`].
///
/// `max_arrivals` bounds the length of the returned arrival set
/// (`maxArrivalsPerSearch`): once reached, later arrivals are simply not
/// recorded, which only ever drops higher-cost arrivals since the frontier
/// is explored in ascending cost order.
#[allow(clippy::too_many_arguments)]
pub fn search(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
    source_peer: PeerId,
    destination_peer: PeerId,
    min_hops: usize,
    max_hops: usize,
    max_arrivals: usize,
    cancel: &dyn CancellationSignal,
) -> Result<(Vec<Arrival>, PredecessorTable), RouteFinderError> {
    let mut best_cost: HashMap<(VertexId, usize), u32> = HashMap::new();
    let mut predecessors: PredecessorTable = PredecessorTable::new();
    let mut frontier = PriorityFrontier::new();
    let mut arrivals = Vec::new();

    // The zero-hop arrival (source == destination, reached without taking
    // any edge) is never produced by the relaxation loop below, since that
    // loop only records an arrival when an edge is traversed into
    // `destination`. Longer routes that return to `destination` through one
    // or more edges are still found by the loop as normal, so this does not
    // short-circuit the search.
    if source == destination && min_hops == 0 && max_arrivals > 0 {
        arrivals.push(Arrival {
            cost: 0,
            hops: 0,
            predecessor: None,
        });
    }

    best_cost.insert((source, 0), 0);
    frontier.push(SearchState {
        vertex: source,
        hops: 0,
        cost: 0,
    });

    while let Some(state) = frontier.pop() {
        if cancel.is_cancelled() {
            return Err(RouteFinderError::Cancelled);
        }

        let SearchState {
            vertex: u,
            hops: h,
            cost: c,
        } = state;

        if best_cost.get(&(u, h)) != Some(&c) {
            continue; // stale: a cheaper (u, h) was already found
        }
        if h >= max_hops {
            continue; // no further edge can respect the hop budget
        }

        for (v, _transport_id, weight) in graph.neighbors_of(u)? {
            let h_next = h + 1;
            let Some(c_next) = c.checked_add(weight) else {
                return Err(RouteFinderError::InternalInvariantViolation(
                    "cumulative cost overflowed u32".to_string(),
                ));
            };

            if v == destination {
                if h_next >= min_hops {
                    if arrivals.len() < max_arrivals {
                        arrivals.push(Arrival {
                            cost: c_next,
                            hops: h_next,
                            predecessor: Some(u),
                        });
                    }
                    continue;
                }
                // below the hop minimum, the destination is a normal node:
                // a longer route that meets the minimum may still pass through it.
            }

            let improves = match best_cost.get(&(v, h_next)) {
                None => true,
                Some(&existing) => c_next < existing,
            };
            if improves {
                best_cost.insert((v, h_next), c_next);
                predecessors.insert((v, h_next), u);
                frontier.push(SearchState {
                    vertex: v,
                    hops: h_next,
                    cost: c_next,
                });
            }
        }
    }

    if arrivals.is_empty() {
        return Err(RouteFinderError::NoRoute(
            source_peer,
            destination_peer,
            max_hops,
        ));
    }
    Ok((arrivals, predecessors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{Graph, PeerEdge, TransportId};
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
    fn finds_two_arrivals_within_window() {
        // S1: A->B, B->C, A->C
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(2, 3), edge(1, 3)]);
        let a = graph.lookup(peer(1)).unwrap();
        let c = graph.lookup(peer(3)).unwrap();
        let (arrivals, _preds) = search(
            &graph,
            a,
            c,
            peer(1),
            peer(3),
            1,
            2,
            1024,
            &NeverCancelled,
        )
        .unwrap();
        let mut costs: Vec<u32> = arrivals.iter().map(|a| a.cost).collect();
        costs.sort();
        assert_eq!(costs, vec![1, 2]);
    }

    #[test]
    fn no_route_when_minimum_cost_exceeds_max_hops() {
        // S2: A->B, B->C, maxLen=1
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(2, 3)]);
        let a = graph.lookup(peer(1)).unwrap();
        let c = graph.lookup(peer(3)).unwrap();
        let result = search(&graph, a, c, peer(1), peer(3), 1, 1, 1024, &NeverCancelled);
        assert!(matches!(result, Err(RouteFinderError::NoRoute(_, _, _))));
    }

    #[test]
    fn zero_hop_self_arrival() {
        // S3: A->B, B->A, find(A, A, 0, 0)
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(2, 1)]);
        let a = graph.lookup(peer(1)).unwrap();
        let (arrivals, _preds) =
            search(&graph, a, a, peer(1), peer(1), 0, 0, 1024, &NeverCancelled).unwrap();
        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].hops, 0);
        assert_eq!(arrivals[0].cost, 0);
        assert!(arrivals[0].predecessor.is_none());
    }

    #[test]
    fn destination_below_min_hops_is_traversed_not_terminal() {
        // S4: A->B, B->C, C->D, A->D, minLen=3 forces the longer route
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(1, 4)]);
        let a = graph.lookup(peer(1)).unwrap();
        let d = graph.lookup(peer(4)).unwrap();
        let (arrivals, _preds) =
            search(&graph, a, d, peer(1), peer(4), 3, 3, 1024, &NeverCancelled).unwrap();
        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].hops, 3);
        assert_eq!(arrivals[0].cost, 3);
    }

    #[test]
    fn cancellation_before_first_pop_aborts_immediately() {
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(2, 3)]);
        let a = graph.lookup(peer(1)).unwrap();
        let c = graph.lookup(peer(3)).unwrap();
        struct AlwaysCancelled;
        impl CancellationSignal for AlwaysCancelled {
            fn is_cancelled(&self) -> bool {
                true
            }
        }
        let result = search(&graph, a, c, peer(1), peer(3), 1, 5, 1024, &AlwaysCancelled);
        assert!(matches!(result, Err(RouteFinderError::Cancelled)));
    }

    #[test]
    fn max_arrivals_caps_recorded_arrivals() {
        // A has three direct edges to the destination-adjacent fan plus a direct edge,
        // producing more than one arrival; cap at 1 keeps only the first recorded.
        let graph = Graph::from_snapshot(vec![edge(1, 2), edge(1, 3), edge(2, 4), edge(3, 4)]);
        let a = graph.lookup(peer(1)).unwrap();
        let d = graph.lookup(peer(4)).unwrap();
        let (arrivals, _preds) =
            search(&graph, a, d, peer(1), peer(4), 1, 3, 1, &NeverCancelled).unwrap();
        assert_eq!(arrivals.len(), 1);
    }
}
