use crate::model::network::{NetworkError, PeerId};

/// The sole error type `RouteEngine::find_routes` can return.
///
/// No variant here carries a partial result: a search either produces the
/// routes it was asked for, or returns one of these and nothing else.
#[derive(thiserror::Error, Debug)]
pub enum RouteFinderError {
    #[error("request is invalid: {0}")]
    InvalidRequest(String),
    #[error("no route exists from {0} to {1} within {2} hops")]
    NoRoute(PeerId, PeerId, usize),
    #[error("search cancelled before completion")]
    Cancelled,
    #[error(transparent)]
    NetworkFailure(#[from] NetworkError),
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}
