use super::cli_args::CliArgs;
use crate::app::{load_config, JsonTransportStore, RouteFinderApp, RouteFinderAppError};
use log::error;
use route_finder_core::model::network::PeerId;
use route_finder_core::util::cancellation::NeverCancelled;
use serde::Deserialize;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

#[derive(Deserialize)]
struct RouteQuery {
    source: PeerId,
    destination: PeerId,
    min_hops: usize,
    max_hops: usize,
    #[serde(default = "default_n")]
    n: usize,
}

fn default_n() -> usize {
    10
}

/// Runs one-off `find_routes` queries from the command line against a
/// static graph snapshot: builds a [`RouteFinderApp`], reads the query file,
/// executes each query, and prints a JSON result (or error) per query.
pub fn command_line_runner(args: &CliArgs) -> Result<(), RouteFinderAppError> {
    let config = load_config(args.config_file.as_deref().map(Path::new))?;

    let store = Arc::new(JsonTransportStore::from_file(Path::new(&args.graph_file))?);
    let app = RouteFinderApp::new(store, config);

    log::info!("reading queries from {}", &args.query_file);
    let query_file = File::open(&args.query_file)
        .map_err(|e| RouteFinderAppError::Io(args.query_file.clone(), e))?;
    let queries: Vec<RouteQuery> = serde_json::from_reader(BufReader::new(query_file))?;

    for query in &queries {
        match app.find_routes(
            query.source,
            query.destination,
            query.min_hops,
            query.max_hops,
            query.n,
            &NeverCancelled,
        ) {
            Ok(routes) => println!("{}", serde_json::to_string(&routes).unwrap_or_default()),
            Err(e) => {
                error!(
                    "query {} -> {} failed: {e}",
                    query.source, query.destination
                );
                println!("{}", json!({ "error": e.to_string() }));
            }
        }
    }

    Ok(())
}
