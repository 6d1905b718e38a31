#![doc = include_str!("doc.md")]

pub mod algorithm;
pub mod config;
pub mod model;
pub mod route_engine;
pub mod util;

pub use algorithm::search::RouteFinderError;
pub use route_engine::{GraphSnapshotHandle, RouteEngine, TransportStore};
