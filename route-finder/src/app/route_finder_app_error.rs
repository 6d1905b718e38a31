use route_finder_core::RouteFinderError;

/// Build-time and request-level failures surfaced by [`super::RouteFinderApp`],
/// kept separate from [`RouteFinderError`] so that config/IO/JSON failures
/// above the core crate don't need a variant inside it.
#[derive(thiserror::Error, Debug)]
pub enum RouteFinderAppError {
    #[error("failed to read {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    RouteFinder(#[from] RouteFinderError),
}
