use urlstate_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging first; fall back to stderr so a read-only state dir
    // doesn't stop the command.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urlstate error: {:#}", err);
        std::process::exit(1);
    }
}
