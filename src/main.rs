use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tscat::cli::{Arguments, ExitStatus};

/// Environment variable holding a `tracing` filter (e.g. `tscat=debug`).
const LOG_ENV: &str = "TSCAT_LOG";

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match tscat::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
