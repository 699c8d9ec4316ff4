use mkpage_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("mkpage error: {:#}", err);
        std::process::exit(1);
    }
}
