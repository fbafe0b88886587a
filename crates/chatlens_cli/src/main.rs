//! CLI entry point for chatlens.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        init_tracing();
    }
    output::init(cli.output);

    if let Err(e) = commands::handle(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Verbose mode: human-readable tracing to stderr, RUST_LOG filter with a
/// debug default.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
