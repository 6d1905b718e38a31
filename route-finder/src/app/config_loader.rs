use config::{Config, ConfigError, Environment, File, FileFormat};
use route_finder_core::config::RouteFinderConfig;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("route_finder.default.toml");

/// Layers the crate's built-in defaults, an optional TOML override file, and
/// `ROUTE_FINDER_*` environment variables, in that order of increasing
/// precedence.
pub fn load_config(override_file: Option<&Path>) -> Result<RouteFinderConfig, ConfigError> {
    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
    if let Some(path) = override_file {
        builder = builder.add_source(File::from(path.to_path_buf()));
    }
    builder = builder.add_source(Environment::with_prefix("ROUTE_FINDER").try_parsing(true));
    builder.build()?.try_deserialize()
}
