use crate::algorithm::reconstruct::reconstruct;
use crate::algorithm::search::{search, RouteFinderError};
use crate::config::RouteFinderConfig;
use crate::model::network::{Graph, PeerEdge, PeerId};
use crate::model::route::Route;
use crate::util::cancellation::CancellationSignal;
use std::sync::{Arc, RwLock};
use std::time::Instant;

/// The caller-supplied source of truth for the graph: filtering out
/// transports deemed unhealthy is this collaborator's responsibility, not
/// `RouteEngine`'s.
pub trait TransportStore {
    fn snapshot_edges(&self) -> Vec<PeerEdge>;
}

/// An `Arc<RwLock<Arc<Graph>>>`-backed holder for atomic graph-snapshot
/// swaps: refreshing takes the write lock only long enough to replace
/// the inner `Arc`; a search takes the read lock only long enough to clone
/// it out, an allocation-free refcount bump, then runs entirely against its
/// own owned snapshot. In-flight searches never observe a refresh mid-way.
#[derive(Clone)]
pub struct GraphSnapshotHandle(Arc<RwLock<Arc<Graph>>>);

impl GraphSnapshotHandle {
    pub fn new(graph: Graph) -> Self {
        Self(Arc::new(RwLock::new(Arc::new(graph))))
    }

    pub fn load(&self) -> Arc<Graph> {
        self.0
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn store(&self, graph: Graph) {
        *self
            .0
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(graph);
    }
}

/// The crate's single public entry point. Owns nothing persistent beyond a
/// [`GraphSnapshotHandle`] and a [`RouteFinderConfig`]; resolves peer
/// identities against the current snapshot, drives [`search`], and hands the
/// result to [`reconstruct`].
pub struct RouteEngine {
    snapshot: GraphSnapshotHandle,
    config: RouteFinderConfig,
}

impl RouteEngine {
    pub fn new(graph: Graph, config: RouteFinderConfig) -> Self {
        Self {
            snapshot: GraphSnapshotHandle::new(graph),
            config,
        }
    }

    pub fn from_store(store: &dyn TransportStore, config: RouteFinderConfig) -> Self {
        Self::new(Graph::from_snapshot(store.snapshot_edges()), config)
    }

    /// A clone of the handle backing this engine's graph, for a caller that
    /// wants to drive the `maxGraphBuildStaleness` refresh loop itself
    /// (see `route-finder`'s `RouteFinderApp`).
    pub fn snapshot_handle(&self) -> GraphSnapshotHandle {
        self.snapshot.clone()
    }

    pub fn config(&self) -> &RouteFinderConfig {
        &self.config
    }

    /// Rebuilds the graph from `store` and atomically swaps it in. In-flight
    /// searches keep using the snapshot they already hold.
    pub fn refresh(&self, store: &dyn TransportStore) {
        let graph = Graph::from_snapshot(store.snapshot_edges());
        log::debug!("graph snapshot refreshed: {} vertices", graph.n_vertices());
        self.snapshot.store(graph);
    }

    /// `findRoutes(source, destination, minLen, maxLen, N, cancel) ->
    /// [Route] or Error`.
    pub fn find_routes(
        &self,
        source: PeerId,
        destination: PeerId,
        min_hops: usize,
        max_hops: usize,
        n: usize,
        cancel: &dyn CancellationSignal,
    ) -> Result<Vec<Route>, RouteFinderError> {
        if min_hops > max_hops {
            return Err(RouteFinderError::InvalidRequest(format!(
                "min_hops ({min_hops}) exceeds max_hops ({max_hops})"
            )));
        }
        if max_hops > self.config.max_search_hops {
            log::warn!(
                "rejecting request: max_hops {max_hops} exceeds configured max_search_hops {}",
                self.config.max_search_hops
            );
            return Err(RouteFinderError::InvalidRequest(format!(
                "max_hops ({max_hops}) exceeds configured max_search_hops ({})",
                self.config.max_search_hops
            )));
        }

        let graph = self.snapshot.load();

        let state_table_size = graph.n_vertices().saturating_mul(max_hops.saturating_add(1));
        if state_table_size > self.config.state_table_ceiling() {
            log::warn!(
                "rejecting request: state table size {state_table_size} exceeds ceiling {}",
                self.config.state_table_ceiling()
            );
            return Err(RouteFinderError::InvalidRequest(format!(
                "request would require a state table of size {state_table_size}, exceeding the configured ceiling"
            )));
        }

        let source_vertex = graph.lookup(source)?;
        let destination_vertex = graph.lookup(destination)?;

        let started = Instant::now();
        let (arrivals, predecessors) = search(
            &graph,
            source_vertex,
            destination_vertex,
            source,
            destination,
            min_hops,
            max_hops,
            self.config.max_arrivals_per_search,
            cancel,
        )?;
        log::debug!(
            "search from {source} to {destination} found {} arrivals in {:?}",
            arrivals.len(),
            started.elapsed()
        );

        let routes = reconstruct(
            &graph,
            arrivals,
            &predecessors,
            source_vertex,
            destination_vertex,
            source,
            destination,
            min_hops as u32,
            max_hops as u32,
            n,
            cancel,
        )?;
        log::debug!(
            "reconstructed {} route(s) from {source} to {destination} in {:?}",
            routes.len(),
            started.elapsed()
        );

        Ok(routes)
    }
}
