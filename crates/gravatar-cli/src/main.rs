use gravatar_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stderr when the state dir is unusable.
    if logging::init_logging().is_err() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(logging::env_filter())
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("gravatar error: {:#}", err);
        std::process::exit(1);
    }
}
