pub mod cli;
mod config_loader;
mod json_transport_store;
mod route_finder_app;
mod route_finder_app_error;

pub use config_loader::load_config;
pub use json_transport_store::JsonTransportStore;
pub use route_finder_app::RouteFinderApp;
pub use route_finder_app_error::RouteFinderAppError;
