//! dxkit CLI entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dxkit::cli::Cli;

fn main() -> Result<()> {
    // RUST_LOG wins over the configured filter; config errors surface in the
    // commands that read it
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(dxkit::config::log_filter()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Initialize tracing (stderr, so stdout stays clean for output)
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse and execute CLI
    let cli = Cli::parse();
    cli.execute()
}
