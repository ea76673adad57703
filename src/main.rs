//! connprobe binary entry point.
//!
//! Probe failures are reported on stdout and never change the exit code.
//! Only unusable arguments or a broken stdout exit non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use connprobe::cli::Args;
use connprobe::output::{self, Reporter};
use connprobe::prober::run_probes;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        output::print_error(&format!("{error:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.to_config().context("invalid arguments")?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), args.output);
    run_probes(&config, &mut reporter)
        .await
        .context("failed to write results")?;

    Ok(())
}

/// Log to stderr so result lines on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "connprobe=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
