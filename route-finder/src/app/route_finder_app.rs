use super::RouteFinderAppError;
use route_finder_core::config::RouteFinderConfig;
use route_finder_core::model::network::PeerId;
use route_finder_core::model::route::Route;
use route_finder_core::util::cancellation::CancellationSignal;
use route_finder_core::{RouteEngine, TransportStore};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// The request-serving context around a [`RouteEngine`]: owns it (and,
/// through it, the engine's `GraphSnapshotHandle`) and a background thread
/// that refreshes the graph every `max_graph_build_staleness`, without
/// blocking any in-flight search.
pub struct RouteFinderApp {
    engine: Arc<RouteEngine>,
    store: Arc<dyn TransportStore + Send + Sync>,
    refresh_interval: Duration,
}

impl RouteFinderApp {
    pub fn new(store: Arc<dyn TransportStore + Send + Sync>, config: RouteFinderConfig) -> Self {
        let refresh_interval = config.max_graph_build_staleness;
        let engine = Arc::new(RouteEngine::from_store(store.as_ref(), config));
        Self {
            engine,
            store,
            refresh_interval,
        }
    }

    /// Spawns the background refresh loop described above. Dropping the
    /// returned handle does not stop the thread; callers that want a clean
    /// shutdown should track it themselves (out of scope here — this is a
    /// CLI demo, not a long-running service).
    pub fn spawn_refresh_loop(&self) -> JoinHandle<()> {
        let engine = Arc::clone(&self.engine);
        let store = Arc::clone(&self.store);
        let interval = self.refresh_interval;
        std::thread::spawn(move || loop {
            std::thread::sleep(interval);
            engine.refresh(store.as_ref());
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn find_routes(
        &self,
        source: PeerId,
        destination: PeerId,
        min_hops: usize,
        max_hops: usize,
        n: usize,
        cancel: &dyn CancellationSignal,
    ) -> Result<Vec<Route>, RouteFinderAppError> {
        self.engine
            .find_routes(source, destination, min_hops, max_hops, n, cancel)
            .map_err(RouteFinderAppError::from)
    }
}
