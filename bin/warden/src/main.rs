//! Warden - block validation with a permissioned-producer gate.

use clap::Parser;
use eyre::Result;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose { "debug" } else { "info" })
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
