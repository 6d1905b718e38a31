use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON file containing a transport snapshot (an array of edges)
    #[arg(short, long, value_name = "*.json")]
    pub graph_file: String,

    /// JSON file containing one or more route queries
    #[arg(short, long, value_name = "*.json")]
    pub query_file: String,

    /// Optional TOML file overriding the built-in route-finder defaults
    #[arg(short, long, value_name = "*.toml")]
    pub config_file: Option<String>,
}
