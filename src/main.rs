mod cli;
mod demos;

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.options.verbose);
    demos::run(cli.command, &cli.options)
}

/// Sends log events to stderr, so they don't mix with the demonstration output. `--verbose` shows
/// everything, otherwise RUST_LOG is used, falling back to `info`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
