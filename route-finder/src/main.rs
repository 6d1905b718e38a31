use clap::Parser;
use log::error;
use route_finder::app::cli::cli_args::CliArgs;
use route_finder::app::cli::run;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    match run::command_line_runner(&args) {
        Ok(_) => {}
        Err(e) => {
            error!("{}", e)
        }
    }
}
