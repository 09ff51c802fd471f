//! kubectl-spill-secrets - decode a Kubernetes Secret from stdin.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kubectl_spill_secrets::cli::{execute, output, Cli};
use kubectl_spill_secrets::core::constants::LOG_ENV;

fn main() {
    // Usage errors exit 2. A rejected flag value also gets the usage line,
    // which clap leaves out for that kind of error.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::ValueValidation {
            let _ = e.print();
            eprintln!("\n{}", Cli::command().render_usage());
            std::process::exit(2);
        }
        e.exit()
    });

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kubectl_spill_secrets=debug")
        } else {
            EnvFilter::new("kubectl_spill_secrets=warn")
        }
    });

    // stdout is reserved for the document
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
