//! keepbest: concurrent solver harness that keeps the best score per problem.

use std::process::ExitCode;

use keepbest_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Diagnostics go to stderr; stdout carries the status stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    errors::exit_code(app::run(&config))
}
